use std::ops::Deref;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::YouTubeConfig,
    error::Error,
    types::{CommentThread, CommentThreadListResponse, VideoListResponse},
    yt::{CommentOrder, CommentSource},
};

pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl Deref for YouTubeClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl YouTubeClient {
    pub const BASE_URL: &'static str = "https://www.googleapis.com/youtube/v3";

    pub fn new(config: YouTubeConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key,
            base_url: Self::BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, Error> {
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        parse_response(status, &body)
    }
}

/// Maps a Data API response: non-2xx statuses become [`Error::Api`] carrying
/// the body, anything else is decoded as `T`.
pub fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, Error> {
    if !(200..300).contains(&status) {
        return Err(Error::Api {
            status,
            message: body.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

impl CommentSource for YouTubeClient {
    #[tracing::instrument(skip(self))]
    async fn get_video_details(&self, video_id: &str) -> Result<VideoListResponse, Error> {
        let resp = self
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet,statistics,contentDetails"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        Self::read_json(resp).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_comments(
        &self,
        video_id: &str,
        max_results: u32,
        order: CommentOrder,
    ) -> Result<Vec<CommentThread>, Error> {
        let max_results = max_results.to_string();
        let resp = self
            .get(format!("{}/commentThreads", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", max_results.as_str()),
                ("order", order.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let page = Self::read_json::<CommentThreadListResponse>(resp).await?;
        if page.next_page_token.is_some() {
            tracing::debug!(
                fetched = page.items.len(),
                "More comment pages available, only the first one is used"
            );
        }
        Ok(page.items)
    }
}
