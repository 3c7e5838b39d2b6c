use std::sync::{Arc, Mutex};

use comment_song::{
    sentiment::{ConfidenceScores, DocumentSentiment},
    Sentiment, SentimentService,
};

/// Labels texts by keyword. Batches listed in `fail_batches` (1-based) error out.
#[derive(Clone, Default)]
pub struct MockSentimentService {
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
    pub fail_batches: Vec<usize>,
}

impl MockSentimentService {
    pub fn failing_batches(fail_batches: Vec<usize>) -> Self {
        Self {
            fail_batches,
            ..Default::default()
        }
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.calls.lock().unwrap().iter().map(Vec::len).collect()
    }
}

pub fn label(text: &str) -> Sentiment {
    if text.contains(" but ") {
        Sentiment::Mixed
    } else if ["muddy", "overrated", "Not their best"]
        .iter()
        .any(|k| text.contains(k))
    {
        Sentiment::Negative
    } else if ["3am", "train"].iter().any(|k| text.contains(k)) {
        Sentiment::Neutral
    } else {
        Sentiment::Positive
    }
}

impl SentimentService for MockSentimentService {
    type Error = anyhow::Error;

    async fn analyze_sentiment(
        &self,
        texts: &[String],
    ) -> Result<Vec<DocumentSentiment>, Self::Error> {
        let batch = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(texts.to_vec());
            calls.len()
        };
        if self.fail_batches.contains(&batch) {
            return Err(anyhow::anyhow!("503 Service Unavailable"));
        }

        Ok(texts
            .iter()
            .map(|t| {
                let sentiment = label(t);
                let confidence_scores = match sentiment {
                    Sentiment::Positive => ConfidenceScores {
                        positive: 0.9,
                        neutral: 0.08,
                        negative: 0.02,
                    },
                    Sentiment::Negative => ConfidenceScores {
                        positive: 0.05,
                        neutral: 0.1,
                        negative: 0.85,
                    },
                    _ => ConfidenceScores {
                        positive: 0.3,
                        neutral: 0.4,
                        negative: 0.3,
                    },
                };
                DocumentSentiment {
                    sentiment,
                    confidence_scores,
                }
            })
            .collect())
    }
}
