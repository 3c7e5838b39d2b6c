use std::sync::{Arc, Mutex};

use comment_song::{
    types::{CommentThread, CommentThreadListResponse, VideoListResponse},
    yt::{CommentOrder, CommentSource},
    Error,
};

#[derive(Clone)]
pub struct MockCommentSource {
    pub video: VideoListResponse,
    pub threads: Vec<CommentThread>,
    pub comment_calls: Arc<Mutex<Vec<(String, u32, CommentOrder)>>>,
    pub fail_with: Option<String>,
}

impl MockCommentSource {
    pub fn new(threads: Vec<CommentThread>) -> Self {
        Self {
            video: serde_json::from_str(include_str!("../fixtures/video.json")).unwrap(),
            threads,
            comment_calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn from_fixture() -> Self {
        let page: CommentThreadListResponse =
            serde_json::from_str(include_str!("../fixtures/comment_threads.json")).unwrap();
        Self::new(page.items)
    }

    pub fn from_texts(texts: &[&str]) -> Self {
        Self::new(threads(texts))
    }

    pub fn video_missing() -> Self {
        Self {
            video: VideoListResponse::default(),
            ..Self::from_fixture()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::from_fixture()
        }
    }
}

pub fn threads(texts: &[&str]) -> Vec<CommentThread> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            serde_json::from_value(serde_json::json!({
                "id": format!("thread{i}"),
                "snippet": {
                    "topLevelComment": {
                        "id": format!("comment{i}"),
                        "snippet": {
                            "textDisplay": text,
                            "authorDisplayName": format!("@user{i}"),
                            "likeCount": 0
                        }
                    },
                    "totalReplyCount": 0
                }
            }))
            .unwrap()
        })
        .collect()
}

impl CommentSource for MockCommentSource {
    async fn get_video_details(&self, _video_id: &str) -> Result<VideoListResponse, Error> {
        if let Some(ref msg) = self.fail_with {
            return Err(Error::Api {
                status: 403,
                message: msg.clone(),
            });
        }
        Ok(self.video.clone())
    }

    async fn get_comments(
        &self,
        video_id: &str,
        max_results: u32,
        order: CommentOrder,
    ) -> Result<Vec<CommentThread>, Error> {
        self.comment_calls
            .lock()
            .unwrap()
            .push((video_id.to_string(), max_results, order));
        Ok(self.threads.clone())
    }
}
