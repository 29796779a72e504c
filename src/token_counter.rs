//! Token cost estimation for request budgeting.
//!
//! The adapter carries no tokenizer. Counts are a deterministic over-estimate
//! of what any routable model's tokenizer would produce, so truncation can
//! never let an over-budget request through. The same heuristic applies to
//! every model.

use crate::models::message::Message;
use crate::models::tool::Tool;

/// Three bytes per token, rounded up. Real tokenizers average closer to four
/// characters per token on English text, so this over-counts.
const CHARS_PER_TOKEN: usize = 3;

/// Fixed framing cost per message: role tag and structural punctuation.
const MESSAGE_OVERHEAD_TOKENS: usize = 4;

/// Fixed framing cost per tool declaration.
const TOOL_OVERHEAD_TOKENS: usize = 4;

/// Estimate the token cost of raw text. Zero for empty input, and never
/// decreasing under concatenation.
pub fn estimate_text_tokens(text: &str) -> usize {
    (text.len() + CHARS_PER_TOKEN - 1) / CHARS_PER_TOKEN
}

/// Estimate the token cost of one message, function call included.
///
/// A function call's `scope` annotation never reaches the wire, so it does
/// not count.
pub fn estimate_message_tokens(message: &Message) -> usize {
    let mut tokens = MESSAGE_OVERHEAD_TOKENS;
    if let Some(content) = &message.content {
        tokens += estimate_text_tokens(content);
    }
    if let Some(call) = &message.function_call {
        tokens += estimate_text_tokens(&call.name);
        tokens += estimate_text_tokens(&call.arguments);
    }
    tokens
}

/// Estimate the token cost of one tool declaration.
pub fn estimate_tool_tokens(tool: &Tool) -> usize {
    TOOL_OVERHEAD_TOKENS + estimate_text_tokens(&tool.name) + estimate_text_tokens(&tool.schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::FunctionCall;
    use serde_json::json;

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(estimate_text_tokens(""), 0);
    }

    #[test]
    fn test_text_rounds_up() {
        assert_eq!(estimate_text_tokens("ab"), 1);
        assert_eq!(estimate_text_tokens("abc"), 1);
        assert_eq!(estimate_text_tokens("abcd"), 2);
    }

    #[test]
    fn test_concatenation_is_monotonic() {
        let a = "hello";
        let b = " world, how are you";
        let combined = format!("{}{}", a, b);
        assert!(estimate_text_tokens(&combined) >= estimate_text_tokens(a));
        assert!(estimate_text_tokens(&combined) >= estimate_text_tokens(b));
    }

    #[test]
    fn test_message_includes_function_call_arguments() {
        let plain = Message::assistant().with_content("ok");
        let with_call = Message::assistant()
            .with_content("ok")
            .with_function_call(FunctionCall::new("search", r#"{"query":"rust"}"#));
        assert!(estimate_message_tokens(&with_call) > estimate_message_tokens(&plain));
    }

    #[test]
    fn test_scope_does_not_count() {
        let call = FunctionCall::new("search", "{}");
        let without_scope =
            Message::assistant().with_function_call(call.clone());
        let with_scope = Message::assistant()
            .with_function_call(call.with_scope(json!({"thread": "a".repeat(600)})));
        assert_eq!(
            estimate_message_tokens(&without_scope),
            estimate_message_tokens(&with_scope)
        );
    }

    #[test]
    fn test_tool_cost_covers_name_and_schema() {
        let tool = crate::models::tool::Tool::new("search", r#"{"type":"object"}"#);
        assert!(estimate_tool_tokens(&tool) > estimate_text_tokens(r#"{"type":"object"}"#));
    }
}
