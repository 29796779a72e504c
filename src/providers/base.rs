use std::pin::Pin;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Raw bytes of the upstream reply, relayed without buffering or parsing.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Successful adapter result: the upstream event stream, passed through
/// untouched.
pub struct StreamResponse {
    pub stream: ByteStream,
}

impl std::fmt::Debug for StreamResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamResponse").finish_non_exhaustive()
    }
}

/// The network collaborator behind the adapter.
///
/// One request in, one stream or error out. Retry and backpressure policy
/// live on the other side of this seam.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `payload` as JSON with bearer authentication and return the
    /// response body as a stream.
    async fn post_stream(&self, url: &str, payload: Value, api_key: &str) -> Result<ByteStream>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_stream(&self, url: &str, payload: Value, api_key: &str) -> Result<ByteStream> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let stream = response.bytes_stream().map_err(anyhow::Error::from);
                Ok(Box::pin(stream))
            }
            status if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() => {
                Err(anyhow!("Server error: {}", status))
            }
            _ => {
                let status = response.status();
                let err_text = response.text().await.unwrap_or_default();
                Err(anyhow!("Request failed: {}: {}", status, err_text))
            }
        }
    }
}
