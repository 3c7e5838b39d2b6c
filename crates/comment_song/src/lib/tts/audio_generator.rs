use std::path::{Path, PathBuf};

use crate::tts::{ssml::create_ssml, CancellationReason, SpeechSynthesizer, SynthesisResult};

pub const DEFAULT_OUTPUT_FILE: &str = "generated_song.mp3";

/// What happened to an audio request. Synthesis problems never surface as
/// errors, only as a non-`Completed` outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioOutcome {
    Completed(PathBuf),
    Canceled {
        reason: CancellationReason,
        details: Option<String>,
    },
    Failed(String),
}

impl AudioOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            AudioOutcome::Completed(path) => Some(path.as_path()),
            _ => None,
        }
    }
}

pub struct AudioGenerator<S: SpeechSynthesizer> {
    synthesizer: S,
}

impl<S: SpeechSynthesizer> AudioGenerator<S> {
    pub fn new(synthesizer: S) -> Self {
        Self { synthesizer }
    }

    pub fn create_ssml(&self, lyrics: &str) -> String {
        create_ssml(lyrics, self.synthesizer.voice_name())
    }

    #[tracing::instrument(skip(self, lyrics))]
    pub async fn generate_audio(&self, lyrics: &str, output_file: &Path) -> AudioOutcome {
        let ssml = self.create_ssml(lyrics);

        let audio = match self.synthesizer.speak_ssml(&ssml).await {
            Ok(SynthesisResult::Completed { audio }) => audio,
            Ok(SynthesisResult::Canceled {
                reason,
                error_details,
            }) => {
                tracing::warn!(%reason, details = ?error_details, "Speech synthesis canceled");
                return AudioOutcome::Canceled {
                    reason,
                    details: error_details,
                };
            }
            Err(e) => {
                tracing::error!(error = %e, "Speech synthesis failed");
                return AudioOutcome::Failed(e.to_string());
            }
        };

        if let Err(e) = tokio::fs::write(output_file, &audio).await {
            tracing::error!(error = %e, path = ?output_file, "Failed to write audio file");
            return AudioOutcome::Failed(e.to_string());
        }

        tracing::info!(path = ?output_file, bytes = audio.len(), "Audio generated");
        AudioOutcome::Completed(output_file.to_path_buf())
    }
}
