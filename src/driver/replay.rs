//! Script replay
//!
//! Streams an operation script through an `OperationEngine` and writes the
//! final account states as CSV.
//!
//! Row-level problems never abort a replay:
//! - unparseable rows are logged and skipped
//! - rejected arguments (`InvalidArgument`, `NullReference`) are logged as
//!   warnings and skipped
//! - overflowing operations are logged as errors and skipped; state is left
//!   as it was before the row
//! - declined operations (`Ok(false)`) are counted
//!
//! Only opening the script or writing the output is fatal.

use crate::core::OperationEngine;
use crate::io::{write_accounts_csv, ScriptReader};
use crate::types::BankError;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;
use tracing::{error, info, warn};

/// Counts collected while replaying a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Operations that took effect
    pub applied: usize,
    /// Operations that returned `false`
    pub declined: usize,
    /// Rows that failed to parse or were rejected with an error
    pub failed: usize,
    /// Bank's total deposits after the last operation
    pub total_deposits: Decimal,
}

/// Replay `input_path` and write the resulting accounts to `output`
///
/// # Errors
///
/// - `FileNotFound` / `IoError` if the script cannot be opened
/// - `IoError` if the account CSV cannot be written
pub fn run_script(input_path: &Path, output: &mut dyn Write) -> Result<ReplaySummary, BankError> {
    let mut engine = OperationEngine::new();
    let mut summary = ReplaySummary::default();

    let reader = ScriptReader::new(input_path)?;

    for result in reader {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "skipping script row");
                summary.failed += 1;
                continue;
            }
        };

        let op = record.op;
        match engine.process(record) {
            Ok(true) => summary.applied += 1,
            Ok(false) => summary.declined += 1,
            Err(e) if e.is_precondition() => {
                warn!(?op, error = %e, "operation rejected");
                summary.failed += 1;
            }
            Err(e) => {
                error!(?op, error = %e, "operation failed");
                summary.failed += 1;
            }
        }
    }

    summary.total_deposits = engine.manager().total_deposits();
    info!(
        applied = summary.applied,
        declined = summary.declined,
        failed = summary.failed,
        total_deposits = %summary.total_deposits,
        "script replayed"
    );

    write_accounts_csv(engine.manager().accounts(), output)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_replay_writes_accounts_and_summary() {
        let file = create_temp_csv(
            "op,holder,amount\n\
             open,Alice,1000\n\
             open,Bob,500\n\
             loan,Alice,400\n\
             withdraw,Bob,600\n",
        );
        let mut output = Vec::new();

        let summary = run_script(file.path(), &mut output).unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                applied: 3,
                declined: 1,
                failed: 0,
                total_deposits: Decimal::from(1100),
            }
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "holder,balance,loan\nAlice,1000.00,400.00\nBob,500.00,0.00\n"
        );
    }

    #[test]
    fn test_replay_continues_after_bad_rows() {
        let file = create_temp_csv(
            "op,holder,amount\n\
             open,Alice,1000\n\
             transfer,Alice,5\n\
             deposit,Alice,-5\n\
             open,,10\n\
             deposit,Alice,5\n",
        );
        let mut output = Vec::new();

        let summary = run_script(file.path(), &mut output).unwrap();

        assert_eq!(summary.applied, 2);
        assert_eq!(summary.failed, 3);
        assert_eq!(summary.total_deposits, Decimal::from(1005));
    }

    #[test]
    fn test_replay_skips_overflowing_operation() {
        let file = create_temp_csv(
            "op,holder,amount\n\
             open,A,79228162514264337593543950335\n\
             loan,A,79228162514264337593543950335\n\
             open,B,79228162514264337593543950335\n\
             loan,B,79228162514264337593543950335\n\
             withdraw,A,79228162514264337593543950335\n\
             withdraw,B,79228162514264337593543950335\n\
             open,C,1\n",
        );
        let mut output = Vec::new();

        let summary = run_script(file.path(), &mut output).unwrap();

        assert_eq!(summary.applied, 6);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total_deposits, Decimal::MIN + Decimal::ONE);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("B,79228162514264337593543950335.00,"));
    }

    #[test]
    fn test_replay_missing_file_is_fatal() {
        let mut output = Vec::new();

        let result = run_script(Path::new("nonexistent.csv"), &mut output);

        assert!(matches!(result, Err(BankError::FileNotFound { .. })));
        assert!(output.is_empty());
    }
}
