use std::path::PathBuf;

use anyhow::Context;

use crate::{
    error::Error,
    llm::LyricsGenerator,
    sentiment::{
        analyzer::{SentimentAnalyzer, SentimentReport},
        Sentiment, SentimentService,
    },
    tts::{
        audio_generator::{AudioGenerator, AudioOutcome},
        SpeechSynthesizer,
    },
    types::{CommentThread, Video},
    yt::{CommentOrder, CommentSource},
};

pub mod builder;

/// Everything one pipeline run produced.
#[derive(Debug)]
pub struct SongReport {
    pub video: Video,
    pub comments_fetched: usize,
    pub sentiment: SentimentReport,
    pub dominant_sentiment: Sentiment,
    pub lyrics: String,
    /// `None` when no speech synthesizer is configured
    pub audio: Option<AudioOutcome>,
}

// Comments -> sentiment -> lyrics -> (optional) audio, one stage at a time
pub struct SongPipeline<C, S, L, A>
where
    C: CommentSource,
    S: SentimentService,
    L: LyricsGenerator,
    A: SpeechSynthesizer,
{
    comment_source: C,
    analyzer: SentimentAnalyzer<S>,
    lyricist: L,
    narrator: Option<AudioGenerator<A>>,
    max_results: u32,
    order: CommentOrder,
    audio_output: PathBuf,
}

impl<C, S, L, A> SongPipeline<C, S, L, A>
where
    C: CommentSource,
    S: SentimentService,
    L: LyricsGenerator,
    A: SpeechSynthesizer,
{
    /// Looks up the video, failing with [`Error::VideoNotFound`] when the
    /// platform returns no items.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_video(&self, video_id: &str) -> anyhow::Result<Video> {
        let details = self
            .comment_source
            .get_video_details(video_id)
            .await
            .context("Failed to fetch video details")?;

        details
            .items
            .into_iter()
            .next()
            .ok_or_else(|| Error::VideoNotFound(video_id.to_string()).into())
    }

    /// Fetches one page of comment threads, failing with [`Error::NoComments`]
    /// when there are none.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_comments(&self, video_id: &str) -> anyhow::Result<Vec<CommentThread>> {
        let threads = self
            .comment_source
            .get_comments(video_id, self.max_results, self.order)
            .await
            .context("Failed to fetch comments")?;

        if threads.is_empty() {
            tracing::info!("No comments found");
            return Err(Error::NoComments.into());
        }
        tracing::info!(count = threads.len(), "Fetched comments");
        Ok(threads)
    }

    #[tracing::instrument(skip_all)]
    pub async fn classify(&self, threads: &[CommentThread]) -> anyhow::Result<SentimentReport> {
        let report = self.analyzer.analyze_comments(threads).await;
        if report.comments.is_empty() {
            return Err(Error::NoAnalyzedComments(threads.len()).into());
        }
        Ok(report)
    }

    #[tracing::instrument(skip_all)]
    pub async fn compose(&self, report: &SentimentReport) -> anyhow::Result<String> {
        let lyrics = self
            .lyricist
            .generate_lyrics(&report.comments, &report.counts, report.counts.dominant())
            .await?;
        Ok(lyrics)
    }

    /// Synthesizes the lyrics when a narrator is configured. Never fails.
    #[tracing::instrument(skip_all)]
    pub async fn narrate(&self, lyrics: &str) -> Option<AudioOutcome> {
        let narrator = self.narrator.as_ref()?;
        Some(narrator.generate_audio(lyrics, &self.audio_output).await)
    }

    #[tracing::instrument(skip(self))]
    pub async fn run(&self, video_id: &str) -> anyhow::Result<SongReport> {
        let video = self.fetch_video(video_id).await?;
        let threads = self.fetch_comments(video_id).await?;
        let sentiment = self.classify(&threads).await?;
        let lyrics = self.compose(&sentiment).await?;
        let audio = self.narrate(&lyrics).await;

        Ok(SongReport {
            video,
            comments_fetched: threads.len(),
            dominant_sentiment: sentiment.counts.dominant(),
            sentiment,
            lyrics,
            audio,
        })
    }
}
