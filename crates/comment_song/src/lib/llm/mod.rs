pub mod azure_openai;
pub mod prompt;

use std::future::Future;

use crate::sentiment::{Comment, Sentiment, SentimentCounts};

pub trait LyricsGenerator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes song lyrics from the analyzed comments. The returned text is the
    /// model output verbatim, section headers included.
    fn generate_lyrics(
        &self,
        comments: &[Comment],
        sentiment_counts: &SentimentCounts,
        dominant_sentiment: Sentiment,
    ) -> impl Future<Output = Result<String, Self::Error>>;
}
