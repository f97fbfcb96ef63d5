//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

mod account;

pub use account::{classify, AccountService, LOG_TAG, UNKNOWN_ERROR_MESSAGE};
