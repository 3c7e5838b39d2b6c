use std::path::PathBuf;

use crate::{
    llm::LyricsGenerator,
    sentiment::{analyzer::SentimentAnalyzer, SentimentService},
    tts::{
        audio_generator::{AudioGenerator, DEFAULT_OUTPUT_FILE},
        NoSpeech, SpeechSynthesizer,
    },
    yt::{CommentOrder, CommentSource, DEFAULT_MAX_RESULTS},
    SongPipeline,
};

/// Leaving out [`SongPipelineBuilder::speech_synthesizer`] builds a pipeline
/// without the audio stage.
pub struct SongPipelineBuilder<C = (), S = (), L = (), A = NoSpeech> {
    comment_source: C,
    sentiment_service: S,
    lyrics_generator: L,
    speech_synthesizer: Option<A>,
    max_results: u32,
    order: CommentOrder,
    audio_output: PathBuf,
}

impl Default for SongPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SongPipelineBuilder {
    pub fn new() -> Self {
        Self {
            comment_source: (),
            sentiment_service: (),
            lyrics_generator: (),
            speech_synthesizer: None,
            max_results: DEFAULT_MAX_RESULTS,
            order: CommentOrder::default(),
            audio_output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl<C, S, L, A> SongPipelineBuilder<C, S, L, A> {
    pub fn comment_source<C2: CommentSource>(
        self,
        comment_source: C2,
    ) -> SongPipelineBuilder<C2, S, L, A> {
        SongPipelineBuilder {
            comment_source,
            sentiment_service: self.sentiment_service,
            lyrics_generator: self.lyrics_generator,
            speech_synthesizer: self.speech_synthesizer,
            max_results: self.max_results,
            order: self.order,
            audio_output: self.audio_output,
        }
    }

    pub fn sentiment_service<S2: SentimentService>(
        self,
        sentiment_service: S2,
    ) -> SongPipelineBuilder<C, S2, L, A> {
        SongPipelineBuilder {
            comment_source: self.comment_source,
            sentiment_service,
            lyrics_generator: self.lyrics_generator,
            speech_synthesizer: self.speech_synthesizer,
            max_results: self.max_results,
            order: self.order,
            audio_output: self.audio_output,
        }
    }

    pub fn lyrics_generator<L2: LyricsGenerator>(
        self,
        lyrics_generator: L2,
    ) -> SongPipelineBuilder<C, S, L2, A> {
        SongPipelineBuilder {
            comment_source: self.comment_source,
            sentiment_service: self.sentiment_service,
            lyrics_generator,
            speech_synthesizer: self.speech_synthesizer,
            max_results: self.max_results,
            order: self.order,
            audio_output: self.audio_output,
        }
    }

    /// `None` skips the audio stage.
    pub fn speech_synthesizer<A2: SpeechSynthesizer>(
        self,
        speech_synthesizer: Option<A2>,
    ) -> SongPipelineBuilder<C, S, L, A2> {
        SongPipelineBuilder {
            comment_source: self.comment_source,
            sentiment_service: self.sentiment_service,
            lyrics_generator: self.lyrics_generator,
            speech_synthesizer,
            max_results: self.max_results,
            order: self.order,
            audio_output: self.audio_output,
        }
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn order(mut self, order: CommentOrder) -> Self {
        self.order = order;
        self
    }

    pub fn audio_output(mut self, audio_output: impl Into<PathBuf>) -> Self {
        self.audio_output = audio_output.into();
        self
    }
}

impl<C, S, L, A> SongPipelineBuilder<C, S, L, A>
where
    C: CommentSource,
    S: SentimentService,
    L: LyricsGenerator,
    A: SpeechSynthesizer,
{
    pub fn build(self) -> SongPipeline<C, S, L, A> {
        SongPipeline {
            comment_source: self.comment_source,
            analyzer: SentimentAnalyzer::new(self.sentiment_service),
            lyricist: self.lyrics_generator,
            narrator: self.speech_synthesizer.map(AudioGenerator::new),
            max_results: self.max_results,
            order: self.order,
            audio_output: self.audio_output,
        }
    }
}
