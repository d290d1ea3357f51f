//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the Account record and its single-account operations
//! - `operation`: script operations replayed against a manager
//! - `error`: Error types for the simulator

pub mod account;
pub mod error;
pub mod operation;

pub use account::Account;
pub use error::BankError;
pub use operation::{OperationRecord, OperationType};
