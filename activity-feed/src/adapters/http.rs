//! HTTP event source
//!
//! Reads the snapshot from `GET {base_url}/events`. No auth, no query
//! parameters, no timeout: a request that never completes just never renders.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::domain::entities::{decode_events, Event};
use crate::domain::ports::EventSource;
use crate::error::FeedError;

const EVENTS_PATH: &str = "/events";

/// Event source backed by the feed service's HTTP API
#[derive(Clone)]
pub struct HttpEventSource {
    client: reqwest::Client,
    events_url: String,
}

impl HttpEventSource {
    /// Create a source for the feed service at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            events_url: format!("{}{}", base_url.trim_end_matches('/'), EVENTS_PATH),
        })
    }

    pub fn events_url(&self) -> &str {
        &self.events_url
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, FeedError> {
        let response = self.client.get(&self.events_url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_events(&body)
    }
}
