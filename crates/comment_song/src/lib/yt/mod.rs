pub mod client;

use std::{fmt, future::Future};

use crate::{
    error::Error,
    types::{CommentThread, VideoListResponse},
};

/// Page size of the comment listing; also the platform's upper bound.
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Ordering of the comment thread listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CommentOrder {
    /// Top comments first
    #[default]
    Relevance,
    /// Newest comments first
    Time,
}

impl CommentOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentOrder::Relevance => "relevance",
            CommentOrder::Time => "time",
        }
    }
}

impl fmt::Display for CommentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait CommentSource {
    /// Looks up a single video. An empty `items` list means the video does not
    /// exist or is not public.
    fn get_video_details(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<VideoListResponse, Error>>;

    /// Fetches one page of top-level comment threads. Empty when the video has
    /// no comments or comments are disabled.
    fn get_comments(
        &self,
        video_id: &str,
        max_results: u32,
        order: CommentOrder,
    ) -> impl Future<Output = Result<Vec<CommentThread>, Error>>;
}
