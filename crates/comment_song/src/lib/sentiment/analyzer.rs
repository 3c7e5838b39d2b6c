use crate::{
    sentiment::{Comment, SentimentCounts, SentimentService},
    types::CommentThread,
};

/// A sentiment batch that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// 1-based batch number
    pub batch: usize,
    pub size: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct SentimentReport {
    pub counts: SentimentCounts,
    pub comments: Vec<Comment>,
    pub failed_batches: Vec<BatchFailure>,
}

impl SentimentReport {
    pub fn skipped_comments(&self) -> usize {
        self.failed_batches.iter().map(|f| f.size).sum()
    }
}

pub struct SentimentAnalyzer<S: SentimentService> {
    service: S,
}

impl<S: SentimentService> SentimentAnalyzer<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Classifies comments in batches of [`SentimentService::MAX_BATCH_SIZE`],
    /// one call at a time. A failing batch is skipped as a whole and reported
    /// in [`SentimentReport::failed_batches`].
    #[tracing::instrument(skip_all, fields(comments = threads.len()))]
    pub async fn analyze_comments(&self, threads: &[CommentThread]) -> SentimentReport {
        let mut report = SentimentReport::default();

        for (idx, batch) in threads.chunks(S::MAX_BATCH_SIZE).enumerate() {
            let batch_no = idx + 1;
            let texts = batch
                .iter()
                .map(|t| t.text().to_string())
                .collect::<Vec<_>>();

            let results = match self.service.analyze_sentiment(&texts).await {
                Ok(results) if results.len() == batch.len() => results,
                Ok(results) => {
                    let reason = format!(
                        "expected {} results, service returned {}",
                        batch.len(),
                        results.len()
                    );
                    tracing::warn!(batch = batch_no, %reason, "Skipping sentiment batch");
                    report.failed_batches.push(BatchFailure {
                        batch: batch_no,
                        size: batch.len(),
                        reason,
                    });
                    continue;
                }
                Err(e) => {
                    tracing::warn!(batch = batch_no, error = %e, "Skipping sentiment batch");
                    report.failed_batches.push(BatchFailure {
                        batch: batch_no,
                        size: batch.len(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            for (thread, result) in batch.iter().zip(results) {
                report.counts.increment(result.sentiment);
                report.comments.push(Comment {
                    text: thread.text().to_string(),
                    author: thread.author().to_string(),
                    sentiment: result.sentiment,
                    confidence_scores: result.confidence_scores,
                });
            }
        }

        tracing::info!(
            analyzed = report.comments.len(),
            failed_batches = report.failed_batches.len(),
            "Sentiment analysis done"
        );
        report
    }
}
