//! Account service - fetches a user's accounts as a single-value stream

use std::sync::Arc;

use futures::future;
use futures::stream::{self, Stream, StreamExt};
use tracing::debug;

use crate::domain::{AccountsResult, STATUS_BODY_WITHOUT_CODE, STATUS_NO_RESPONSE};
use crate::ports::{AccountClient, DiagnosticLog, RawResponse};

/// Tag attached to diagnostic records written by this service
pub const LOG_TAG: &str = "AccountService";

/// Message logged when a failure has no text of its own
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Turn a raw (body, status) reply into the domain result
///
/// | body    | status  | result                        |
/// |---------|---------|-------------------------------|
/// | present | present | status, mapped accounts       |
/// | absent  | present | status, no accounts           |
/// | present | absent  | `1`, mapped accounts          |
/// | absent  | absent  | `0`, no accounts              |
///
/// The match is exhaustive, so [`crate::domain::STATUS_UNCLASSIFIED`] is
/// never produced here.
pub fn classify(response: RawResponse) -> AccountsResult {
    match (response.body, response.status_code) {
        (Some(body), Some(code)) => AccountsResult::new(code, body.to_domain()),
        (None, Some(code)) => AccountsResult::empty(code),
        (Some(body), None) => AccountsResult::new(STATUS_BODY_WITHOUT_CODE, body.to_domain()),
        (None, None) => AccountsResult::empty(STATUS_NO_RESPONSE),
    }
}

fn describe_failure(error: &impl std::fmt::Display) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

/// Account fetch service
pub struct AccountService {
    client: Arc<dyn AccountClient>,
    diagnostics: Arc<dyn DiagnosticLog>,
}

impl AccountService {
    pub fn new(client: Arc<dyn AccountClient>, diagnostics: Arc<dyn DiagnosticLog>) -> Self {
        Self {
            client,
            diagnostics,
        }
    }

    /// Fetch the accounts of `user_id`
    ///
    /// The returned stream is cold: the request is sent on first poll. It
    /// yields one [`AccountsResult`] and ends, or ends without yielding if
    /// the client failed. Failures are written to the diagnostic log and
    /// go no further. Dropping the stream before it yields abandons the
    /// request.
    pub fn fetch_account_data(
        &self,
        user_id: &str,
    ) -> impl Stream<Item = AccountsResult> + Send + 'static {
        let client = Arc::clone(&self.client);
        let diagnostics = Arc::clone(&self.diagnostics);
        let user_id = user_id.to_string();

        stream::once(async move {
            debug!("fetching accounts");
            match client.get_user_account(&user_id).await {
                Ok(response) => {
                    let result = classify(response);
                    debug!(
                        status_code = result.status_code,
                        accounts = result.accounts.len(),
                        "accounts fetched"
                    );
                    Some(result)
                }
                Err(e) => {
                    diagnostics.log(LOG_TAG, &describe_failure(&e));
                    None
                }
            }
        })
        .filter_map(future::ready)
    }

    /// Drive [`Self::fetch_account_data`] to its only item
    pub async fn fetch_account_data_once(&self, user_id: &str) -> Option<AccountsResult> {
        let stream = self.fetch_account_data(user_id);
        futures::pin_mut!(stream);
        stream.next().await
    }
}
