//! Account API wire model
//!
//! Mirrors the JSON returned by the accounts endpoint:
//! ```json
//! { "accounts": [ { "id": "1", "main": true, "balance": 100.0 } ] }
//! ```
//! Wire key names are declared in [`ACCOUNT_SCHEMA`] and [`ACCOUNTS_SCHEMA`].

pub mod schema;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::result::Result;
use crate::domain::Account;

pub use schema::{decode, decode_slice, encode, Field, Schema};

/// Key table for a single account object
pub static ACCOUNT_SCHEMA: Schema = Schema::new(
    "account",
    &[
        Field::new("id", "id"),
        Field::new("main", "is_main"),
        Field::new("balance", "balance"),
    ],
);

/// Key table for the accounts list envelope
pub static ACCOUNTS_SCHEMA: Schema = Schema::new(
    "accounts response",
    &[Field::nested("accounts", "accounts", &ACCOUNT_SCHEMA)],
);

/// One account as delivered by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountWire {
    pub id: String,
    pub is_main: bool,
    pub balance: f64,
}

impl AccountWire {
    pub fn new(id: impl Into<String>, is_main: bool, balance: f64) -> Self {
        Self {
            id: id.into(),
            is_main,
            balance,
        }
    }

    /// Convert to the domain model. Values are copied unchanged.
    pub fn to_domain(&self) -> Account {
        Account {
            account_id: self.id.clone(),
            is_account_main: self.is_main,
            account_balance: self.balance,
        }
    }
}

/// Root envelope of the accounts response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountsWire {
    pub accounts: Vec<AccountWire>,
}

impl AccountsWire {
    pub fn new(accounts: Vec<AccountWire>) -> Self {
        Self { accounts }
    }

    /// Decode from wire JSON
    pub fn from_json(value: JsonValue) -> Result<Self> {
        decode(value, &ACCOUNTS_SCHEMA)
    }

    /// Decode from raw response bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        decode_slice(bytes, &ACCOUNTS_SCHEMA)
    }

    /// Encode back to wire JSON
    pub fn to_json(&self) -> Result<JsonValue> {
        encode(self, &ACCOUNTS_SCHEMA)
    }

    /// Map every account to the domain model, preserving order
    pub fn to_domain(&self) -> Vec<Account> {
        self.accounts.iter().map(AccountWire::to_domain).collect()
    }
}
