//! Context-window capacities for the model families routable through Unify.

/// Fallback context window for models missing from the table. Deliberately
/// small: an unknown model must never be over-filled.
pub const DEFAULT_CONTEXT_WINDOW: usize = 2_048;

/// Tokens held back from the window for the model's own reply.
pub const RESERVED_OUTPUT_TOKENS: usize = 1_024;

/// Published context-window size for a model, by exact name.
///
/// The name is the `<model>` half of a `model@provider` identifier. A miss
/// is not an error, only the conservative default.
pub fn max_tokens_for_model(model: &str) -> usize {
    match model {
        "mistral-7b-instruct-v0.1" => 8_192,
        "mistral-7b-instruct-v0.2" => 32_768,
        "mixtral-8x7b-instruct-v0.1" => 32_768,
        "mixtral-8x22b-instruct-v0.1" => 65_536,
        "llama-2-7b-chat" | "llama-2-13b-chat" | "llama-2-70b-chat" => 4_096,
        "llama-3-8b-chat" | "llama-3-70b-chat" => 8_192,
        "codellama-7b-instruct" | "codellama-13b-instruct" | "codellama-34b-instruct" => 16_384,
        "gemma-2b-it" | "gemma-7b-it" => 8_192,
        "deepseek-coder-33b-instruct" => 16_384,
        "qwen-1.5-14b-chat" | "qwen-1.5-72b-chat" => 32_768,
        "gpt-3.5-turbo" => 16_385,
        "gpt-4" => 8_192,
        "gpt-4-turbo" | "gpt-4o" => 128_000,
        "claude-3-haiku" | "claude-3-sonnet" | "claude-3-opus" => 200_000,
        _ => DEFAULT_CONTEXT_WINDOW,
    }
}

/// Tokens available for messages and tool declarations in one request,
/// after reserving room for the reply.
pub fn token_budget(model: &str) -> usize {
    max_tokens_for_model(model).saturating_sub(RESERVED_OUTPUT_TOKENS)
}
