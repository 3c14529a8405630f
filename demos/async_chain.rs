//! Async chaining with lazy failure annotation.
//!
//! Run with: `cargo run --example async_chain --features async`

use reason_rail::prelude_async::*;

async fn fetch_balance(account: u64) -> Outcome<i64> {
    // Pretend this went to a ledger service.
    if account == 404 {
        Outcome::fail(Error::new("account not found").with_status(404))
    } else {
        Outcome::ok(2_500).with_success("balance fetched")
    }
}

async fn reserve(amount: i64, balance: i64) -> Outcome<i64> {
    if amount <= balance {
        Outcome::ok(balance - amount)
    } else {
        Outcome::fail("insufficient funds")
    }
}

async fn checkout(account: u64, amount: i64) -> Outcome<i64> {
    fetch_balance(account)
        .on_fail_with(|| Error::new("while loading account").with_code("E_ACCT"))
        .await
        .bind_async(|balance| reserve(amount, balance))
        .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    for (account, amount) in [(1, 100), (1, 9_000), (404, 100)] {
        let outcome = checkout(account, amount).await;
        if outcome.is_success() {
            println!("account {account}: reserved, {} left", outcome.value());
        } else {
            let chain: Vec<String> =
                outcome.iter_errors().map(|error| error.to_string()).collect();
            println!("account {account}: failed [{}]", chain.join("; "));
        }
    }
}
