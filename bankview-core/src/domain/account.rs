//! Account domain model

use serde::Serialize;

/// Status code reported when the client returned neither a body nor a status.
pub const STATUS_NO_RESPONSE: u16 = 0;

/// Status code reported when a body arrived without an HTTP status.
pub const STATUS_BODY_WITHOUT_CODE: u16 = 1;

/// Reserved for a response shape outside the body/status presence matrix.
/// No such shape exists, so the fetch operation never produces it.
pub const STATUS_UNCLASSIFIED: u16 = 2;

/// A bank account owned by the user
///
/// Only built from the wire model (see [`crate::wire::AccountWire::to_domain`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub(crate) account_id: String,
    pub(crate) is_account_main: bool,
    pub(crate) account_balance: f64,
}

impl Account {
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn is_account_main(&self) -> bool {
        self.is_account_main
    }

    pub fn account_balance(&self) -> f64 {
        self.account_balance
    }
}

/// Outcome of one account fetch
///
/// `status_code` holds the HTTP status when the client reported one, else
/// one of the `STATUS_*` sentinels above.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AccountsResult {
    pub status_code: u16,
    pub accounts: Vec<Account>,
}

impl AccountsResult {
    pub fn new(status_code: u16, accounts: Vec<Account>) -> Self {
        Self {
            status_code,
            accounts,
        }
    }

    /// Result carrying a status and no accounts
    pub fn empty(status_code: u16) -> Self {
        Self::new(status_code, Vec::new())
    }

    /// Whether `status_code` is one of the synthetic sentinels rather than HTTP
    pub fn is_synthetic_status(&self) -> bool {
        self.status_code < 100
    }

    /// The main account, if the user has one
    pub fn main_account(&self) -> Option<&Account> {
        self.accounts.iter().find(|a| a.is_account_main)
    }

    /// Sum of all account balances
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|a| a.account_balance).sum()
    }
}
