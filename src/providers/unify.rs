use log::{info, warn};
use serde_json::json;

use super::base::{HttpTransport, StreamResponse, Transport};
use super::configs::UnifyProviderConfig;
use super::utils::{messages_to_unify_spec, split_model_id, strip_function_call_scope};
use crate::capacity;
use crate::errors::{AdapterError, AdapterResult};
use crate::models::request::ChatRequest;
use crate::truncate::limit_messages_to_token_count;

/// Service adapter for the Unify inference API.
///
/// Shapes an application conversation into the payload the endpoint
/// expects: fills in the default model, trims the conversation to the
/// target model's context window, strips internal function-call
/// annotations, and relays the streamed reply back untouched.
pub struct UnifyAdapter {
    transport: Box<dyn Transport>,
    config: UnifyProviderConfig,
}

impl UnifyAdapter {
    /// Create an adapter over the default HTTP transport.
    ///
    /// Fails immediately when no credential is supplied; the credential is
    /// validated once here, not on every call.
    pub fn new(config: UnifyProviderConfig) -> AdapterResult<Self> {
        if config.api_key.is_empty() {
            return Err(AdapterError::Configuration(
                "API key is required for UnifyAdapter".to_string(),
            ));
        }

        let transport =
            HttpTransport::new().map_err(|e| AdapterError::Configuration(e.to_string()))?;

        Ok(Self {
            transport: Box::new(transport),
            config,
        })
    }

    /// Create an adapter from environment variables
    pub fn from_env() -> AdapterResult<Self> {
        Self::new(UnifyProviderConfig::from_env()?)
    }

    /// Replace the network collaborator behind the adapter
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Shape `request` to fit the target model and dispatch it, returning
    /// the upstream event stream.
    pub async fn get_response(&self, request: &ChatRequest) -> AdapterResult<StreamResponse> {
        // operate on an owned copy; the caller's request is never mutated
        let ChatRequest {
            model,
            tools,
            messages,
            extra,
        } = request.clone();

        let model_id = model.unwrap_or_else(|| self.config.model.clone());
        let (model, provider) = split_model_id(&model_id);

        let budget = capacity::token_budget(model);
        let kept = limit_messages_to_token_count(&messages, &tools, budget)?;
        if kept.len() < messages.len() {
            info!(
                "dropped {} of {} messages to fit the {} token budget of {}",
                messages.len() - kept.len(),
                messages.len(),
                budget,
                model
            );
        }
        let kept = strip_function_call_scope(kept);

        let mut arguments = extra;
        arguments.insert("stream".to_string(), json!(true));
        arguments.insert("messages".to_string(), json!(messages_to_unify_spec(&kept)));
        if !tools.is_empty() {
            arguments.insert("tools".to_string(), json!(tools));
        }

        let mut payload = json!({
            "model": model,
            "arguments": arguments,
        });
        if let Some(provider) = provider {
            payload["provider"] = json!(provider);
        }

        let stream = self
            .transport
            .post_stream(&self.config.host, payload, &self.config.api_key)
            .await
            .map_err(|e| {
                warn!("Unify request failed: {}", e);
                AdapterError::Upstream(e.to_string())
            })?;

        Ok(StreamResponse { stream })
    }
}
