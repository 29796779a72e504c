use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::message::Message;
use super::tool::Tool;

/// An inbound chat request from the application.
///
/// The fields the adapter acts on are typed; anything else the caller sends
/// rides in `extra` and is forwarded inside the outbound `arguments` object
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = tools;
        self
    }

    /// Add a pass-through field the adapter does not interpret
    pub fn with_extra<S: Into<String>>(mut self, key: S, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_pass_through() {
        let raw = json!({
            "model": "llama-3-8b-chat@together-ai",
            "messages": [{"role": "user", "content": "hi"}],
            "temperature": 0.2,
            "max_tokens": 64
        });

        let request: ChatRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(request.model.as_deref(), Some("llama-3-8b-chat@together-ai"));
        assert_eq!(request.messages.len(), 1);
        assert!(request.tools.is_empty());
        assert_eq!(request.extra["temperature"], json!(0.2));
        assert_eq!(request.extra["max_tokens"], json!(64));
    }

    #[test]
    fn test_defaults() {
        let request: ChatRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.model.is_none());
        assert!(request.messages.is_empty());
        assert!(request.tools.is_empty());
        assert!(request.extra.is_empty());
    }
}
