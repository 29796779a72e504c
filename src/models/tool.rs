use serde::{Deserialize, Serialize};

/// A tool the model may call, declared alongside the conversation.
///
/// Declarations are all-or-nothing: they are sent exactly as supplied or not
/// at all, never truncated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// The name of the tool
    pub name: String,
    /// Schema describing the tool's parameters, kept as the raw text the
    /// caller supplied
    pub schema: String,
}

impl Tool {
    /// Create a new tool with the given name and schema
    pub fn new<N, S>(name: N, schema: S) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        Tool {
            name: name.into(),
            schema: schema.into(),
        }
    }
}
