//! Error types for the banking simulator
//!
//! This module defines every error that can be returned by the simulator.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Precondition Errors**: a non-positive or negative amount, an absent holder
//! - **Arithmetic Errors**: overflow in balance or aggregate calculations
//! - **File I/O Errors**: script file not found, read/write failures
//! - **CSV Parsing Errors**: malformed script rows
//!
//! Expected business outcomes (unknown holder, insufficient funds, repayment
//! larger than the loan, loan larger than the deposit pool) are NOT errors.
//! Those are reported as `Ok(false)` or `None` by the account operations.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking simulator
///
/// The account core only ever produces `InvalidArgument`, `NullReference`
/// and `ArithmeticOverflow`. The remaining variants belong to the script
/// replay pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// An amount violated the precondition of an operation
    ///
    /// Raised synchronously and never recovered by the core; the caller
    /// decides what to do with it.
    #[error("Invalid {operation} amount {amount}: {requirement}")]
    InvalidArgument {
        /// Operation that rejected the amount
        operation: String,
        /// The rejected amount
        amount: Decimal,
        /// What the operation requires of the amount
        requirement: String,
    },

    /// The account holder name is absent
    ///
    /// Only raised when creating an account.
    #[error("Account holder name cannot be absent")]
    NullReference,

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected and state is left unchanged.
    #[error("Arithmetic overflow in {operation} for holder '{holder}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Holder whose account (or the bank aggregate) was being updated
        holder: String,
    },

    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the script or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A script row could not be parsed
    ///
    /// Recoverable: the row is skipped and replay continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create an InvalidArgument error for an amount that must be strictly positive
    pub fn must_be_positive(operation: &str, amount: Decimal) -> Self {
        BankError::InvalidArgument {
            operation: operation.to_string(),
            amount,
            requirement: "must be positive".to_string(),
        }
    }

    /// Create an InvalidArgument error for an amount that must not be negative
    pub fn must_not_be_negative(operation: &str, amount: Decimal) -> Self {
        BankError::InvalidArgument {
            operation: operation.to_string(),
            amount,
            requirement: "cannot be negative".to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, holder: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            holder: holder.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        BankError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// True for the precondition errors raised by the account core
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            BankError::InvalidArgument { .. } | BankError::NullReference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_argument_positive(
        BankError::must_be_positive("deposit", Decimal::ZERO),
        "Invalid deposit amount 0: must be positive"
    )]
    #[case::invalid_argument_negative(
        BankError::must_not_be_negative("withdraw", Decimal::from(-50)),
        "Invalid withdraw amount -50: cannot be negative"
    )]
    #[case::null_reference(BankError::NullReference, "Account holder name cannot be absent")]
    #[case::arithmetic_overflow(
        BankError::arithmetic_overflow("deposit", "Alice"),
        "Arithmetic overflow in deposit for holder 'Alice'"
    )]
    #[case::file_not_found(
        BankError::FileNotFound { path: "ops.csv".to_string() },
        "File not found: ops.csv"
    )]
    #[case::parse_error_with_line(
        BankError::parse_error(Some(4), "Invalid amount 'abc'"),
        "CSV parse error at line 4: Invalid amount 'abc'"
    )]
    #[case::parse_error_without_line(
        BankError::parse_error(None, "Invalid amount 'abc'"),
        "CSV parse error: Invalid amount 'abc'"
    )]
    fn test_error_display(#[case] error: BankError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_argument(BankError::must_be_positive("loan", Decimal::ZERO), true)]
    #[case::null_reference(BankError::NullReference, true)]
    #[case::overflow(BankError::arithmetic_overflow("deposit", "Bob"), false)]
    #[case::io(BankError::IoError { message: "disk".to_string() }, false)]
    fn test_is_precondition(#[case] error: BankError, #[case] expected: bool) {
        assert_eq!(error.is_precondition(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: BankError = io_error.into();
        assert!(matches!(error, BankError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
