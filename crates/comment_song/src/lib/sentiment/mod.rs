pub mod analyzer;
pub mod azure;

use std::{fmt, future::Future};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Mixed,
}

impl Sentiment {
    /// Every label, in the order counts are reported and ties are broken.
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
        Sentiment::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Result for one document of a sentiment batch.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSentiment {
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
}

/// A comment paired with its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
    pub author: String,
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub mixed: usize,
}

impl SentimentCounts {
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
            Sentiment::Mixed => self.mixed,
        }
    }

    pub fn increment(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Mixed => self.mixed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, usize)> + '_ {
        Sentiment::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// The most frequent label other than `Mixed`. Ties go to the label that
    /// comes first in [`Sentiment::ALL`].
    pub fn dominant(&self) -> Sentiment {
        self.iter()
            .filter(|(s, _)| *s != Sentiment::Mixed)
            .fold(None, |best: Option<(Sentiment, usize)>, (s, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((s, count)),
            })
            .map(|(s, _)| s)
            .unwrap_or(Sentiment::Positive)
    }
}

pub trait SentimentService {
    /// Largest batch a single call accepts.
    const MAX_BATCH_SIZE: usize = 10;

    type Error: fmt::Display;

    /// Classifies `texts`, returning exactly one result per input in input order.
    fn analyze_sentiment(
        &self,
        texts: &[String],
    ) -> impl Future<Output = Result<Vec<DocumentSentiment>, Self::Error>>;
}
