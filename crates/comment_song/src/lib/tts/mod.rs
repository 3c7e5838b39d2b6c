pub mod audio_generator;
pub mod azure_speech;
pub mod ssml;

use std::{fmt, future::Future};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationReason {
    /// The service rejected the request
    Error,
    /// The service answered without any audio
    EmptyAudio,
}

impl fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancellationReason::Error => f.write_str("Error"),
            CancellationReason::EmptyAudio => f.write_str("EmptyAudio"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisResult {
    Completed {
        audio: Vec<u8>,
    },
    Canceled {
        reason: CancellationReason,
        error_details: Option<String>,
    },
}

/// Synthesizer type of a pipeline built without an audio stage. It has no
/// values, so the audio stage can never run with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSpeech {}

pub trait SpeechSynthesizer {
    type Error: fmt::Display;

    /// Voice referenced by the SSML envelope.
    fn voice_name(&self) -> &str;

    fn speak_ssml(&self, ssml: &str) -> impl Future<Output = Result<SynthesisResult, Self::Error>>;
}

impl SpeechSynthesizer for NoSpeech {
    type Error = std::convert::Infallible;

    fn voice_name(&self) -> &str {
        match *self {}
    }

    async fn speak_ssml(&self, _ssml: &str) -> Result<SynthesisResult, Self::Error> {
        match *self {}
    }
}
