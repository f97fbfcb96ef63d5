//! Core domain entities
//!
//! Pure data structures with no I/O or external dependencies.

mod account;
pub mod result;

pub use account::{
    Account, AccountsResult, STATUS_BODY_WITHOUT_CODE, STATUS_NO_RESPONSE, STATUS_UNCLASSIFIED,
};
