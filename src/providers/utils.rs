use serde_json::{json, Value};

use crate::models::message::Message;

/// Split a composite `model@provider` identifier.
///
/// The provider half is optional; an identifier without `@` addresses the
/// model with no provider pin.
pub fn split_model_id(model_id: &str) -> (&str, Option<&str>) {
    match model_id.split_once('@') {
        Some((model, provider)) => (model, Some(provider)),
        None => (model_id, None),
    }
}

/// Remove the internal `scope` annotation from every function call.
///
/// Returns new values; nothing is mutated in place. The upstream endpoint
/// rejects function calls carrying unknown fields, so this runs on every
/// outbound conversation after trimming, immediately before serialization.
pub fn strip_function_call_scope(messages: Vec<Message>) -> Vec<Message> {
    messages
        .into_iter()
        .map(|mut message| {
            if let Some(call) = message.function_call.as_mut() {
                call.scope = None;
            }
            message
        })
        .collect()
}

/// Convert messages to the JSON array the Unify API expects.
pub fn messages_to_unify_spec(messages: &[Message]) -> Vec<Value> {
    messages.iter().map(|message| json!(message)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::FunctionCall;
    use serde_json::json;

    #[test]
    fn test_split_model_id() {
        assert_eq!(
            split_model_id("mistral-7b-instruct-v0.2@fireworks-ai"),
            ("mistral-7b-instruct-v0.2", Some("fireworks-ai"))
        );
        assert_eq!(split_model_id("gpt-4"), ("gpt-4", None));
        assert_eq!(split_model_id("llama@"), ("llama", Some("")));
    }

    #[test]
    fn test_strip_scope_removes_only_scope() {
        let messages = vec![
            Message::user().with_content("hi"),
            Message::assistant().with_function_call(
                FunctionCall::new("lookup", r#"{"q":1}"#).with_scope(json!({"thread": "t1"})),
            ),
            Message::tool().with_content("found it"),
        ];

        let stripped = strip_function_call_scope(messages.clone());

        assert_eq!(stripped.len(), messages.len());
        assert_eq!(stripped[0], messages[0]);
        assert_eq!(stripped[2], messages[2]);

        let call = stripped[1].function_call.as_ref().unwrap();
        assert!(call.scope.is_none());
        assert_eq!(call.name, "lookup");
        assert_eq!(call.arguments, r#"{"q":1}"#);
    }

    #[test]
    fn test_strip_scope_without_scope_is_noop() {
        let messages =
            vec![Message::assistant().with_function_call(FunctionCall::new("lookup", "{}"))];
        let stripped = strip_function_call_scope(messages.clone());
        assert_eq!(stripped, messages);
    }

    #[test]
    fn test_messages_to_unify_spec() {
        let messages = strip_function_call_scope(vec![
            Message::user().with_content("Hello"),
            Message::assistant()
                .with_function_call(FunctionCall::new("lookup", "{}").with_scope(json!("internal"))),
        ]);
        let spec = messages_to_unify_spec(&messages);

        assert_eq!(spec.len(), 2);
        assert_eq!(spec[0]["role"], "user");
        assert_eq!(spec[0]["content"], "Hello");
        assert_eq!(spec[1]["function_call"]["name"], "lookup");
        assert!(spec[1]["function_call"].get("scope").is_none());
    }
}
