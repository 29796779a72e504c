pub mod capacity;
pub mod errors;
pub mod models;
pub mod providers;
pub mod token_counter;
pub mod truncate;
