#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not set")]
    MissingCredential(&'static str),
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Sentiment analysis error: {0}")]
    Sentiment(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Video not found: {0}")]
    VideoNotFound(String),
    #[error("No comments found or comments are disabled for this video")]
    NoComments,
    #[error("None of the {0} fetched comments could be analyzed")]
    NoAnalyzedComments(usize),
    #[error("Error generating lyrics: {0}")]
    Generation(String),
}
