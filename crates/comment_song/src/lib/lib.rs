pub mod config;
mod error;
pub mod llm;
mod processor;
pub mod sentiment;
pub mod tracing;
pub mod tts;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::{azure_openai, prompt::PromptStrategy, LyricsGenerator};
pub use processor::{builder::SongPipelineBuilder, SongPipeline, SongReport};
pub use sentiment::{
    analyzer::{BatchFailure, SentimentAnalyzer, SentimentReport},
    Comment, Sentiment, SentimentCounts, SentimentService,
};
pub use tts::{
    audio_generator::{AudioGenerator, AudioOutcome},
    NoSpeech, SpeechSynthesizer,
};
