use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::AzureOpenAIConfig,
    error::Error,
    llm::{prompt::PromptStrategy, LyricsGenerator},
    sentiment::{Comment, Sentiment, SentimentCounts},
};

pub struct AzureOpenAIClient {
    client: Client,
    config: AzureOpenAIConfig,
    strategy: PromptStrategy,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in response")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub messages: [ChatMessage<'a>; 2],
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl AzureOpenAIClient {
    const SYSTEM_PROMPT: &'static str = include_str!("./prompts/system_0.txt");

    pub fn new(config: AzureOpenAIConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            strategy: PromptStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: PromptStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    pub async fn send_completion_request(
        &self,
        user_content: &str,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = CompletionRequest {
            messages: [
                ChatMessage {
                    role: "system",
                    content: Self::SYSTEM_PROMPT.trim_end(),
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let resp = self
            .client
            .post(self.completions_url())
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

/// Content of the first choice.
pub fn first_completion(response: CompletionResponse) -> Result<String, OpenAIError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(OpenAIError::EmptyCompletion)
}

impl LyricsGenerator for AzureOpenAIClient {
    type Error = Error;

    #[tracing::instrument(skip_all, fields(comments = comments.len(), %dominant_sentiment, model = %self.config.model))]
    async fn generate_lyrics(
        &self,
        comments: &[Comment],
        sentiment_counts: &SentimentCounts,
        dominant_sentiment: Sentiment,
    ) -> Result<String, Self::Error> {
        let prompt = self
            .strategy
            .build_prompt(comments, sentiment_counts, dominant_sentiment);

        self.send_completion_request(&prompt)
            .await
            .and_then(first_completion)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate lyrics"))
            .map_err(|e| Error::Generation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AzureOpenAIClient {
        let config = AzureOpenAIConfig::new(
            Some("key".into()),
            Some("https://songs.openai.azure.com/".into()),
            Some("gpt-4o".into()),
        )
        .unwrap()
        .with_temperature(0.5)
        .with_max_tokens(800);
        AzureOpenAIClient::new(config)
    }

    #[test]
    fn test_completions_url_uses_deployment() {
        assert_eq!(
            client().completions_url(),
            "https://songs.openai.azure.com/openai/deployments/gpt-4o/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = CompletionRequest {
            messages: [
                ChatMessage {
                    role: "system",
                    content: AzureOpenAIClient::SYSTEM_PROMPT.trim_end(),
                },
                ChatMessage {
                    role: "user",
                    content: "write a song",
                },
            ],
            temperature: 0.5,
            max_tokens: 800,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert!(json["messages"][0]["content"]
            .as_str()
            .unwrap()
            .starts_with("You are a creative songwriter"));
        assert_eq!(json["messages"][1]["content"], "write a song");
        assert_eq!(json["max_tokens"], 800);
    }

    #[test]
    fn test_first_completion_returns_text_verbatim() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "CHORUS\nla la la\n\nVERSE 1\nhey"}, "finish_reason": "stop"},
                    {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            first_completion(response).unwrap(),
            "CHORUS\nla la la\n\nVERSE 1\nhey"
        );
    }

    #[test]
    fn test_first_completion_without_choices() {
        let response: CompletionResponse =
            serde_json::from_str(r#"{"id": "chatcmpl-2", "choices": []}"#).unwrap();

        assert!(matches!(
            first_completion(response),
            Err(OpenAIError::EmptyCompletion)
        ));
    }
}
