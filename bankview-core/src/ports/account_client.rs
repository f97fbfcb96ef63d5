//! Account client port
//!
//! Defines the single network-boundary dependency of the fetch operation:
//! one request for the accounts of a user, answered with the raw
//! (status, body) pair as the transport saw it.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::wire::AccountsWire;

/// Raw reply from the accounts endpoint
///
/// Either half may be missing independently of the other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawResponse {
    pub status_code: Option<u16>,
    pub body: Option<AccountsWire>,
}

impl RawResponse {
    pub fn new(status_code: Option<u16>, body: Option<AccountsWire>) -> Self {
        Self { status_code, body }
    }
}

/// Account listing client
///
/// Implementations own transport, serialization, timeouts and retries.
#[async_trait]
pub trait AccountClient: Send + Sync {
    /// Request the account list for `user_id`
    ///
    /// `user_id` is passed through as-is.
    async fn get_user_account(&self, user_id: &str) -> Result<RawResponse>;
}
