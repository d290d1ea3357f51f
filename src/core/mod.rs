//! Core business logic module
//!
//! This module contains the banking components:
//! - `account_manager` - Account ownership, lookup and the deposit pool
//! - `engine` - Dispatches script operations onto an account manager

pub mod account_manager;
pub mod engine;

pub use account_manager::AccountManager;
pub use engine::OperationEngine;
