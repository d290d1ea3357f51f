//! Operation types for script replay
//!
//! This module defines the operations a script can apply to an
//! `AccountManager` and the parsed record handed to the `OperationEngine`.

use rust_decimal::Decimal;

/// Operations supported by the replay engine
///
/// Each variant maps one-to-one onto an `AccountManager` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Create an account with an initial deposit
    Open,

    /// Credit funds to an existing account
    Deposit,

    /// Debit funds from an existing account (requires sufficient balance)
    Withdraw,

    /// Grant a loan capped by the bank's total deposits
    ///
    /// The loan is recorded on the account but not credited to its balance.
    ApproveLoan,

    /// Pay back part or all of an outstanding loan
    RepayLoan,
}

impl OperationType {
    /// Parse a script keyword, case-insensitively
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "open" => Some(OperationType::Open),
            "deposit" => Some(OperationType::Deposit),
            "withdraw" => Some(OperationType::Withdraw),
            "loan" | "approve_loan" => Some(OperationType::ApproveLoan),
            "repay" | "repay_loan" => Some(OperationType::RepayLoan),
            _ => None,
        }
    }
}

/// A single parsed script row
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub op: OperationType,

    /// Target holder; empty means the holder is absent
    pub holder: String,

    pub amount: Decimal,
}
