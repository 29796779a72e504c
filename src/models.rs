//! These models represent the objects exchanged with the Unify inference API.
//!
//! The wire format is the OpenAI-style flat chat shape: role-tagged messages
//! with optional text content and an optional function call, plus a flat set
//! of tool declarations. Inbound requests from the application arrive as a
//! [`request::ChatRequest`], which types the fields the adapter acts on and
//! carries everything else through untouched.
pub mod message;
pub mod request;
pub mod role;
pub mod tool;
