use std::sync::{Arc, Mutex};

use comment_song::{Comment, Error, LyricsGenerator, Sentiment, SentimentCounts};

#[derive(Debug, Clone)]
pub struct LyricsCall {
    pub comments: Vec<Comment>,
    pub counts: SentimentCounts,
    pub dominant: Sentiment,
}

#[derive(Clone)]
pub struct MockLyricsGenerator {
    pub lyrics: String,
    pub calls: Arc<Mutex<Vec<LyricsCall>>>,
    pub fail_with: Option<String>,
}

impl MockLyricsGenerator {
    pub fn new(lyrics: &str) -> Self {
        Self {
            lyrics: lyrics.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            lyrics: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl LyricsGenerator for MockLyricsGenerator {
    type Error = Error;

    async fn generate_lyrics(
        &self,
        comments: &[Comment],
        sentiment_counts: &SentimentCounts,
        dominant_sentiment: Sentiment,
    ) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(LyricsCall {
            comments: comments.to_vec(),
            counts: *sentiment_counts,
            dominant: dominant_sentiment,
        });
        if let Some(ref msg) = self.fail_with {
            return Err(Error::Generation(msg.clone()));
        }
        Ok(self.lyrics.clone())
    }
}
