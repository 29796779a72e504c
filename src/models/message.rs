use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::role::Role;

/// A function invocation requested by the model, or echoed back by the
/// application when it replays the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded arguments, kept as the raw text the wire carries
    pub arguments: String,
    /// Internal annotation injected by the application layer. The upstream
    /// endpoint does not understand it; it must be stripped from every
    /// outbound payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Value>,
}

impl FunctionCall {
    pub fn new<N, A>(name: N, arguments: A) -> Self
    where
        N: Into<String>,
        A: Into<String>,
    {
        FunctionCall {
            name: name.into(),
            arguments: arguments.into(),
            scope: None,
        }
    }

    pub fn with_scope(mut self, scope: Value) -> Self {
        self.scope = Some(scope);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A message to or from an LLM
pub struct Message {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

impl Message {
    pub fn new(role: Role) -> Self {
        Message {
            role,
            content: None,
            function_call: None,
        }
    }

    /// Create a new system message
    pub fn system() -> Self {
        Self::new(Role::System)
    }

    /// Create a new user message
    pub fn user() -> Self {
        Self::new(Role::User)
    }

    /// Create a new assistant message
    pub fn assistant() -> Self {
        Self::new(Role::Assistant)
    }

    /// Create a new tool message
    pub fn tool() -> Self {
        Self::new(Role::Tool)
    }

    /// Add text content to the message
    pub fn with_content<S: Into<String>>(mut self, content: S) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attach a function call to the message
    pub fn with_function_call(mut self, function_call: FunctionCall) -> Self {
        self.function_call = Some(function_call);
        self
    }

    /// Whether this is an assistant message carrying a function call
    pub fn is_function_call(&self) -> bool {
        matches!(self.role, Role::Assistant) && self.function_call.is_some()
    }

    /// Whether this is a tool message answering an earlier function call
    pub fn is_function_response(&self) -> bool {
        matches!(self.role, Role::Tool)
    }
}
