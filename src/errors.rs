use serde::{Deserialize, Serialize};
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, Deserialize, Serialize)]
pub enum AdapterError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Token budget exhausted: {0}")]
    BudgetExhausted(String),

    #[error("Error fetching response from Unify API: {0}")]
    Upstream(String),
}

pub type AdapterResult<T> = Result<T, AdapterError>;
