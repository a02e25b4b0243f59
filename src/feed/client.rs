// src/feed/client.rs
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Client, StatusCode};
use tracing::warn;
use url::Url;

use crate::models::{FeedEnvelope, Post, Result};

/// Outcome of the one-shot feed load. Empty-but-successful is deliberately
/// distinct from failure: the two render different static messages.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loaded(Vec<Post>),
    Empty,
    Failed,
}

/// Fetches the Instagram feed once at page load. No retry, no timeout
/// beyond the platform default, no cancellation: an abandoned fetch is
/// simply dropped.
pub struct FeedClient {
    client: Client,
    endpoint: Url,
}

impl FeedClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let endpoint = Url::parse(base_url)?.join("api/instagram")?;
        let client = Client::builder()
            .user_agent("maharaja-site-feed/0.1")
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Every failure path collapses into `FeedState::Failed` with a logged
    /// warning; nothing escapes as an error.
    pub async fn fetch(&self) -> FeedState {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!("Instagram feed request failed: {}", e);
                return FeedState::Failed;
            }
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => classify_response(status, &body),
            Err(e) => {
                warn!("Failed to read Instagram feed body: {}", e);
                FeedState::Failed
            }
        }
    }
}

/// Pure core of the fetch flow: status and body in, render state out.
pub fn classify_response(status: StatusCode, body: &str) -> FeedState {
    if !status.is_success() {
        warn!("Instagram feed returned status {}", status);
        return FeedState::Failed;
    }

    let envelope: FeedEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("Failed to parse Instagram feed body: {}", e);
            return FeedState::Failed;
        }
    };

    if envelope.data.is_empty() {
        FeedState::Empty
    } else {
        FeedState::Loaded(envelope.data)
    }
}
