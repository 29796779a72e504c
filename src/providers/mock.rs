use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use serde_json::Value;

use super::base::{ByteStream, Transport};

/// A mock transport that records outbound payloads and replays canned
/// chunks, for testing the adapter without a socket
pub struct MockTransport {
    chunks: Vec<Bytes>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
    fail_with: Option<String>,
}

impl MockTransport {
    /// Create a mock transport that streams the given chunks back
    pub fn new(chunks: Vec<Bytes>) -> Self {
        Self {
            chunks,
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    /// Create a mock transport that fails every call with the given message
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self {
            chunks: Vec::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(message.into()),
        }
    }

    /// Handle onto the recorded `(url, payload)` pairs
    pub fn requests(&self) -> Arc<Mutex<Vec<(String, Value)>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_stream(&self, url: &str, payload: Value, _api_key: &str) -> Result<ByteStream> {
        if let Some(message) = &self.fail_with {
            return Err(anyhow!("{}", message));
        }

        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), payload));

        let chunks: Vec<Result<Bytes>> = self.chunks.iter().cloned().map(Ok).collect();
        Ok(Box::pin(stream::iter(chunks)))
    }
}
