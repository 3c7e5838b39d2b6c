pub mod comment_source;
pub mod lyrics_generator;
pub mod sentiment_service;
pub mod speech_synthesizer;
