//! Entry-point pipelines
//!
//! Two ways to drive an `AccountManager`:
//! - `demo` - the fixed Alice/Bob walkthrough printed as plain text
//! - `replay` - a CSV script of operations, reported as account CSV

pub mod demo;
pub mod replay;

pub use demo::run_demo;
pub use replay::{run_script, ReplaySummary};
