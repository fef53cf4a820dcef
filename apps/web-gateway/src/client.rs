//! HTTP client for the posts API.

use std::time::Duration;

use reqwest::{Response, StatusCode};

use blog_core::domain::{Post, PostId};
use blog_shared::ErrorResponse;
use blog_shared::dto::{CreatedResponse, PostRequest};

/// Errors returned by `BlogApiClient`.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, timeout or body decoding failure.
    #[error("Backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Post not found")]
    NotFound,

    #[error("Backend returned {status}: {detail}")]
    Status { status: u16, detail: String },
}

/// Thin client over the posts API. Holds no state besides the pooled
/// `reqwest::Client`, so clones are cheap.
#[derive(Debug, Clone)]
pub struct BlogApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl BlogApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }

    fn post_url(&self, id: PostId) -> String {
        format!("{}/api/posts/{}", self.base_url, id)
    }

    /// GET /api/posts
    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let resp = self.http.get(self.posts_url()).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// GET /api/posts/{id}
    pub async fn get_post(&self, id: PostId) -> Result<Post, ClientError> {
        let resp = self.http.get(self.post_url(id)).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// POST /api/posts
    pub async fn create_post(&self, post: &PostRequest) -> Result<CreatedResponse, ClientError> {
        let resp = self.http.post(self.posts_url()).json(post).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// PUT /api/posts/{id}
    pub async fn update_post(&self, id: PostId, post: &PostRequest) -> Result<(), ClientError> {
        let resp = self.http.put(self.post_url(id)).json(post).send().await?;
        check(resp).await?;
        Ok(())
    }

    /// DELETE /api/posts/{id}
    pub async fn delete_post(&self, id: PostId) -> Result<(), ClientError> {
        let resp = self.http.delete(self.post_url(id)).send().await?;
        check(resp).await?;
        Ok(())
    }
}

/// Turn non-2xx responses into errors, keeping the problem detail if any.
async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    let body = resp.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|e| e.detail.or(Some(e.title)))
        .unwrap_or(body);

    Err(ClientError::Status {
        status: status.as_u16(),
        detail,
    })
}
