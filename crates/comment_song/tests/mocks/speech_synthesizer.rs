use std::sync::{Arc, Mutex};

use comment_song::{
    tts::{CancellationReason, SynthesisResult},
    SpeechSynthesizer,
};

#[derive(Clone)]
pub struct MockSpeechSynthesizer {
    pub result: SynthesisResult,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockSpeechSynthesizer {
    pub fn completed(audio: &[u8]) -> Self {
        Self {
            result: SynthesisResult::Completed {
                audio: audio.to_vec(),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn canceled(details: &str) -> Self {
        Self {
            result: SynthesisResult::Canceled {
                reason: CancellationReason::Error,
                error_details: Some(details.to_string()),
            },
            ..Self::completed(&[])
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::completed(&[])
        }
    }
}

impl SpeechSynthesizer for MockSpeechSynthesizer {
    type Error = anyhow::Error;

    fn voice_name(&self) -> &str {
        "en-US-AriaNeural"
    }

    async fn speak_ssml(&self, ssml: &str) -> Result<SynthesisResult, Self::Error> {
        self.calls.lock().unwrap().push(ssml.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.result.clone())
    }
}
