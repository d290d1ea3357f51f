//! Scripted demonstration
//!
//! Seeds two accounts and walks through one of each operation, writing a
//! human-readable line per step. The last two lines show the sum of account
//! balances next to the bank's total deposits; they differ by the
//! outstanding loan because approved loans are not credited to balances.

use crate::core::AccountManager;
use crate::types::BankError;
use rust_decimal::Decimal;
use std::io::Write;
use tracing::info;

fn describe(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| "no such account".to_string(), |a| a.to_string())
}

/// Run the fixed Alice/Bob sequence against a fresh manager
///
/// Returns the manager so callers can inspect the final state.
pub fn run_demo(output: &mut dyn Write) -> Result<AccountManager, BankError> {
    let mut manager = AccountManager::new();

    manager.add_account("Alice", Decimal::from(1000))?;
    manager.add_account("Bob", Decimal::from(500))?;
    info!(accounts = manager.accounts().len(), "demo accounts seeded");

    let deposited = manager.deposit("Alice", Decimal::from(200))?;
    writeln!(output, "Depositing 200 to Alice: {}", deposited)?;
    writeln!(output, "Alice's balance: {}", describe(manager.balance("Alice")))?;

    let withdrawn = manager.withdraw("Bob", Decimal::from(300))?;
    writeln!(output, "Withdrawing 300 from Bob: {}", withdrawn)?;
    writeln!(output, "Bob's balance: {}", describe(manager.balance("Bob")))?;

    let approved = manager.approve_loan("Alice", Decimal::from(400))?;
    writeln!(output, "Approving a loan of 400 for Alice: {}", approved)?;
    writeln!(output, "Alice's loan: {}", describe(manager.loan("Alice")))?;

    let repaid = manager.repay_loan("Alice", Decimal::from(200))?;
    writeln!(output, "Repaying 200 of Alice's loan: {}", repaid)?;
    writeln!(output, "Alice's remaining loan: {}", describe(manager.loan("Alice")))?;

    writeln!(output, "Total account balances: {}", manager.total_balances()?)?;
    writeln!(output, "Total deposits in the bank: {}", manager.total_deposits())?;

    Ok(manager)
}
