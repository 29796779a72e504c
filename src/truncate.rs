//! Message trimming against a model token budget.
//!
//! Given a conversation, the declared tools, and a budget, keep the longest
//! recent stretch of the conversation that fits. Tool declarations are
//! reserved first and never truncated; the unit of truncation is always a
//! whole message.

use log::debug;

use crate::errors::{AdapterError, AdapterResult};
use crate::models::message::Message;
use crate::models::role::Role;
use crate::models::tool::Tool;
use crate::token_counter::{estimate_message_tokens, estimate_tool_tokens};

/// Reduce a conversation so `messages` plus `tools` fit within `budget`
/// tokens.
///
/// The newest messages win: the walk runs from the end of the conversation
/// and stops at the first entry that no longer fits, dropping it and
/// everything earlier. An assistant function call and the tool responses
/// answering it are kept or dropped as one unit. The conversation's first
/// system message is exempt from the walk and survives as long as it fits at
/// all. Output order is chronological.
///
/// Fails with [`AdapterError::BudgetExhausted`] when the tool declarations
/// alone consume the budget, or when the system message alone cannot fit in
/// what they leave.
pub fn limit_messages_to_token_count(
    messages: &[Message],
    tools: &[Tool],
    budget: usize,
) -> AdapterResult<Vec<Message>> {
    let tool_cost: usize = tools.iter().map(estimate_tool_tokens).sum();
    let remaining = budget.saturating_sub(tool_cost);
    if remaining == 0 {
        return Err(AdapterError::BudgetExhausted(format!(
            "tool declarations consume {} of {} budget tokens, leaving none for messages",
            tool_cost, budget
        )));
    }

    // The first system message is re-inserted at its original position, so
    // its cost is reserved before the walk starts.
    let system_index = messages.iter().position(|m| m.role == Role::System);
    let mut used = 0usize;
    if let Some(index) = system_index {
        let cost = estimate_message_tokens(&messages[index]);
        if cost > remaining {
            return Err(AdapterError::BudgetExhausted(format!(
                "system message needs {} tokens but only {} remain after tool declarations",
                cost, remaining
            )));
        }
        used += cost;
    }

    // Inclusion units over the remaining conversation: each message stands
    // alone, except an assistant function call, which forms one unit with
    // the contiguous tool responses that follow it. Splitting such a pair
    // produces a request the endpoint rejects.
    let mut units: Vec<(usize, usize)> = Vec::new();
    let mut index = 0;
    while index < messages.len() {
        if Some(index) == system_index {
            index += 1;
            continue;
        }
        let mut end = index;
        if messages[index].is_function_call() {
            let mut next = index + 1;
            while next < messages.len()
                && Some(next) != system_index
                && messages[next].is_function_response()
            {
                end = next;
                next += 1;
            }
        }
        units.push((index, end));
        index = end + 1;
    }

    let mut keep = vec![false; messages.len()];
    if let Some(index) = system_index {
        keep[index] = true;
    }

    for &(start, end) in units.iter().rev() {
        let cost: usize = messages[start..=end].iter().map(estimate_message_tokens).sum();
        if used + cost > remaining {
            break;
        }
        used += cost;
        for slot in &mut keep[start..=end] {
            *slot = true;
        }
    }

    let kept: Vec<Message> = messages
        .iter()
        .zip(&keep)
        .filter(|(_, keep)| **keep)
        .map(|(message, _)| message.clone())
        .collect();

    if kept.len() < messages.len() {
        debug!(
            "trimmed conversation from {} to {} messages ({} of {} budget tokens used)",
            messages.len(),
            kept.len(),
            used + tool_cost,
            budget
        );
    }

    Ok(kept)
}
