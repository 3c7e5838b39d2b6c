use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::TextAnalyticsConfig,
    error::Error,
    sentiment::{ConfidenceScores, DocumentSentiment, Sentiment, SentimentService},
};

/// Azure AI Language sentiment client (Text Analytics REST API v3.1).
pub struct TextAnalyticsClient {
    client: Client,
    config: TextAnalyticsConfig,
}

#[derive(Debug, Serialize)]
struct SentimentRequest<'a> {
    documents: Vec<RequestDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestDocument<'a> {
    id: String,
    language: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResponse {
    #[serde(default)]
    pub documents: Vec<DocumentResult>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResult {
    pub id: String,
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
}

#[derive(Debug, Deserialize)]
pub struct DocumentError {
    pub id: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl TextAnalyticsClient {
    const SENTIMENT_PATH: &'static str = "text/analytics/v3.1/sentiment";

    pub fn new(config: TextAnalyticsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn send_sentiment_request(
        &self,
        texts: &[String],
    ) -> Result<SentimentResponse, Error> {
        let body = SentimentRequest {
            documents: texts
                .iter()
                .enumerate()
                .map(|(idx, text)| RequestDocument {
                    id: idx.to_string(),
                    language: &self.config.language,
                    text,
                })
                .collect(),
        };

        let resp = self
            .client
            .post(format!(
                "{}/{}",
                self.config.endpoint.trim_end_matches('/'),
                Self::SENTIMENT_PATH
            ))
            .header("Ocp-Apim-Subscription-Key", &self.config.key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Api { status, message });
        }

        Ok(resp.json::<SentimentResponse>().await?)
    }
}

/// Puts the documents back into request order using their ids. Any per-document
/// error or missing id fails the whole batch.
pub fn correlate(
    response: SentimentResponse,
    expected: usize,
) -> Result<Vec<DocumentSentiment>, Error> {
    if let Some(err) = response.errors.first() {
        return Err(Error::Sentiment(format!(
            "document {} rejected: {} ({})",
            err.id, err.error.message, err.error.code
        )));
    }

    let mut slots: Vec<Option<DocumentSentiment>> = vec![None; expected];
    for doc in response.documents {
        let idx = doc
            .id
            .parse::<usize>()
            .ok()
            .filter(|idx| *idx < expected)
            .ok_or_else(|| Error::Sentiment(format!("unexpected document id {}", doc.id)))?;
        slots[idx] = Some(DocumentSentiment {
            sentiment: doc.sentiment,
            confidence_scores: doc.confidence_scores,
        });
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(idx, slot)| {
            slot.ok_or_else(|| Error::Sentiment(format!("no result for document {idx}")))
        })
        .collect()
}

impl SentimentService for TextAnalyticsClient {
    type Error = Error;

    #[tracing::instrument(skip_all, fields(batch_size = texts.len()))]
    async fn analyze_sentiment(&self, texts: &[String]) -> Result<Vec<DocumentSentiment>, Error> {
        let response = self.send_sentiment_request(texts).await?;
        correlate(response, texts.len())
    }
}
