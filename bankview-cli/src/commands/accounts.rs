//! Accounts command - fetch and show the accounts of a user

use anyhow::Result;
use bankview_core::{AccountsResult, OperationResult};
use colored::Colorize;

use super::get_context;
use crate::output;

const NO_RESULT_MESSAGE: &str = "No account data received (see log output for details)";

pub async fn run(user_id: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let result = ctx.account_service.fetch_account_data_once(user_id).await;

    if json {
        let report = match &result {
            Some(accounts) => OperationResult::ok(accounts.clone()),
            None => OperationResult::fail(NO_RESULT_MESSAGE)
                .with_context("userId", serde_json::json!(user_id)),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(accounts) = &result {
        print_accounts(accounts);
    }

    if result.is_none() {
        anyhow::bail!(NO_RESULT_MESSAGE);
    }
    Ok(())
}

fn print_accounts(result: &AccountsResult) {
    let status = if result.is_synthetic_status() {
        format!("{} (no HTTP status)", result.status_code)
    } else {
        result.status_code.to_string()
    };
    if (200..300).contains(&result.status_code) {
        output::success(&format!("Status: {}", status));
    } else {
        output::warning(&format!("Status: {}", status));
    }

    if result.accounts.is_empty() {
        println!("{}", "No accounts".dimmed());
        return;
    }

    let mut table = output::create_table();
    table.set_header(vec!["Account", "Main", "Balance"]);
    for account in &result.accounts {
        table.add_row(vec![
            account.account_id().to_string(),
            if account.is_account_main() { "yes" } else { "" }.to_string(),
            output::format_balance(account.account_balance()),
        ]);
    }
    println!("{}", table);
    if let Some(main) = result.main_account() {
        println!("Main account: {}", main.account_id().bold());
    }
    println!(
        "Total: {}",
        output::format_balance(result.total_balance()).bold()
    );
}
