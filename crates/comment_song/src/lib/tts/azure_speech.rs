use reqwest::Client;

use crate::{
    config::SpeechConfig,
    error::Error,
    tts::{CancellationReason, SpeechSynthesizer, SynthesisResult},
};

/// Azure Speech text-to-speech over the REST endpoint.
pub struct AzureSpeechClient {
    client: Client,
    config: SpeechConfig,
    base_url: String,
}

impl AzureSpeechClient {
    pub const OUTPUT_FORMAT: &'static str = "audio-16khz-128kbitrate-mono-mp3";

    pub fn new(config: SpeechConfig) -> Self {
        let base_url = format!("https://{}.tts.speech.microsoft.com", config.region);
        Self {
            client: Client::new(),
            config,
            base_url,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl SpeechSynthesizer for AzureSpeechClient {
    type Error = Error;

    fn voice_name(&self) -> &str {
        &self.config.voice_name
    }

    #[tracing::instrument(skip_all, fields(voice = %self.config.voice_name))]
    async fn speak_ssml(&self, ssml: &str) -> Result<SynthesisResult, Self::Error> {
        let resp = self
            .client
            .post(format!("{}/cognitiveservices/v1", self.base_url))
            .header("Ocp-Apim-Subscription-Key", &self.config.key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", Self::OUTPUT_FORMAT)
            .header("User-Agent", env!("CARGO_PKG_NAME"))
            .body(ssml.to_owned())
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(synthesis_result(status, body.to_vec()))
    }
}

/// Maps a synthesis response: a non-2xx status cancels with the status and
/// body as details, an empty 2xx body cancels with `EmptyAudio`.
pub fn synthesis_result(status: u16, body: Vec<u8>) -> SynthesisResult {
    if !(200..300).contains(&status) {
        return SynthesisResult::Canceled {
            reason: CancellationReason::Error,
            error_details: Some(format!("{status} - {}", String::from_utf8_lossy(&body))),
        };
    }

    if body.is_empty() {
        return SynthesisResult::Canceled {
            reason: CancellationReason::EmptyAudio,
            error_details: None,
        };
    }

    SynthesisResult::Completed { audio: body }
}
