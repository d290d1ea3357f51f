//! Banking Simulator Library
//! # Overview
//!
//! An in-memory, single-threaded banking simulator. It tracks named
//! accounts with a balance and an outstanding loan, plus a bank-wide total
//! of deposits that caps how much can be lent.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, operations, errors)
//! - [`core`] - Business logic components:
//!   - [`core::account_manager`] - Account ownership, lookup and the deposit pool
//!   - [`core::engine`] - Dispatches script operations onto a manager
//! - [`io`] - CSV script parsing and account output
//! - [`driver`] - The demo walkthrough and the script replay pipeline
//! - [`cli`] - CLI arguments parsing and logging setup
//!
//! # Operations
//!
//! - **Open**: Create an account with a positive initial deposit
//! - **Deposit**: Credit an existing account
//! - **Withdraw**: Debit an account (requires sufficient balance)
//! - **Approve loan**: Record a loan capped by the bank's total deposits
//! - **Repay loan**: Reduce an outstanding loan
//!
//! Invalid amounts are errors ([`BankError`]). Unknown holders, insufficient
//! funds and loan limits are ordinary `false` outcomes.
//!
//! # Total Deposits
//!
//! An approved loan is drawn from the total deposits but is not credited to
//! the borrower's balance, so the total deposits fall below the sum of all
//! balances while loans are outstanding.
//!
//! ```
//! use rust_banking_simulator::AccountManager;
//! use rust_decimal::Decimal;
//!
//! let mut bank = AccountManager::new();
//! bank.add_account("Alice", Decimal::from(1000)).unwrap();
//! assert_eq!(bank.approve_loan("Alice", Decimal::from(400)), Ok(true));
//! assert_eq!(bank.total_deposits(), Decimal::from(600));
//! assert_eq!(bank.balance("Alice"), Some(Decimal::from(1000)));
//! ```

pub mod cli;
pub mod core;
pub mod driver;
pub mod io;
pub mod types;

pub use core::{AccountManager, OperationEngine};
pub use io::write_accounts_csv;
pub use types::{Account, BankError, OperationRecord, OperationType};
