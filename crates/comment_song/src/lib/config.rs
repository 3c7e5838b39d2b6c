//! Per-component configuration.
//!
//! Every client takes its own config struct at construction time, so nothing in
//! the library reads the process environment. The binary fills these from
//! `clap` args backed by environment variables.

use crate::error::Error;

pub const YOUTUBE_API_KEY: &str = "YOUTUBE_API_KEY";
pub const TEXT_ANALYTICS_ENDPOINT: &str = "TEXT_ANALYTICS_ENDPOINT";
pub const TEXT_ANALYTICS_KEY: &str = "TEXT_ANALYTICS_KEY";
pub const AZURE_OPENAI_KEY: &str = "AZURE_OPENAI_KEY";
pub const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_MODEL: &str = "AZURE_OPENAI_MODEL";
pub const AZURE_SPEECH_KEY: &str = "AZURE_SPEECH_KEY";
pub const AZURE_SPEECH_REGION: &str = "AZURE_SPEECH_REGION";

/// Returns the value if it holds something other than whitespace.
fn require(name: &'static str, value: Option<String>) -> Result<String, Error> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(Error::MissingCredential(name))
}

#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
}

impl YouTubeConfig {
    pub fn new(api_key: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            api_key: require(YOUTUBE_API_KEY, api_key)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TextAnalyticsConfig {
    pub endpoint: String,
    pub key: String,
    /// Language hint sent with every document.
    pub language: String,
}

impl TextAnalyticsConfig {
    pub fn new(endpoint: Option<String>, key: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            endpoint: require(TEXT_ANALYTICS_ENDPOINT, endpoint)?,
            key: require(TEXT_ANALYTICS_KEY, key)?,
            language: "en".into(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct AzureOpenAIConfig {
    pub api_key: String,
    pub endpoint: String,
    /// Deployment name of the chat model.
    pub model: String,
    pub api_version: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl AzureOpenAIConfig {
    pub const DEFAULT_API_VERSION: &'static str = "2024-02-01";
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 1000;

    pub fn new(
        api_key: Option<String>,
        endpoint: Option<String>,
        model: Option<String>,
    ) -> Result<Self, Error> {
        Ok(Self {
            api_key: require(AZURE_OPENAI_KEY, api_key)?,
            endpoint: require(AZURE_OPENAI_ENDPOINT, endpoint)?,
            model: require(AZURE_OPENAI_MODEL, model)?,
            api_version: Self::DEFAULT_API_VERSION.into(),
            temperature: Self::DEFAULT_TEMPERATURE,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
        })
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub key: String,
    pub region: String,
    pub voice_name: String,
}

impl SpeechConfig {
    pub const DEFAULT_VOICE: &'static str = "en-US-AriaNeural";

    pub fn new(key: Option<String>, region: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            key: require(AZURE_SPEECH_KEY, key)?,
            region: require(AZURE_SPEECH_REGION, region)?,
            voice_name: Self::DEFAULT_VOICE.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_the_variable() {
        let err = YouTubeConfig::new(None).unwrap_err();
        assert!(matches!(err, Error::MissingCredential(YOUTUBE_API_KEY)));
        assert_eq!(err.to_string(), "YOUTUBE_API_KEY not set");
    }

    #[test]
    fn test_blank_credential_is_rejected() {
        let err = TextAnalyticsConfig::new(Some("https://x".into()), Some("   ".into()))
            .unwrap_err();
        assert!(matches!(err, Error::MissingCredential(TEXT_ANALYTICS_KEY)));
    }

    #[test]
    fn test_openai_defaults_and_overrides() {
        let config = AzureOpenAIConfig::new(
            Some("key".into()),
            Some("https://example.openai.azure.com".into()),
            Some("gpt-4o".into()),
        )
        .expect("valid config");

        assert_eq!(config.api_version, "2024-02-01");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 1000);

        let config = config.with_temperature(0.2).with_max_tokens(256);
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 256);
    }

    #[test]
    fn test_openai_requires_model() {
        let err = AzureOpenAIConfig::new(Some("key".into()), Some("https://x".into()), None)
            .unwrap_err();
        assert!(matches!(err, Error::MissingCredential(AZURE_OPENAI_MODEL)));
    }

    #[test]
    fn test_speech_uses_fixed_voice() {
        let config = SpeechConfig::new(Some("key".into()), Some("westeurope".into()))
            .expect("valid config");
        assert_eq!(config.voice_name, "en-US-AriaNeural");
    }
}
