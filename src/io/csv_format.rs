//! CSV format handling for operation scripts and account output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Account output serialization
//!
//! Script format (header required, whitespace trimmed):
//!
//! ```text
//! op,holder,amount
//! open,Alice,1000
//! deposit,Alice,200
//! loan,Alice,400
//! ```

use crate::types::{Account, BankError, OperationRecord, OperationType};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub op: String,
    #[serde(default)]
    pub holder: String,
    pub amount: Option<String>,
}

pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, String> {
    let op = OperationType::from_keyword(&csv_record.op)
        .ok_or_else(|| format!("Invalid operation: '{}'", csv_record.op))?;

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            Decimal::from_str(amount_str.trim())
                .map_err(|_| format!("Invalid amount '{}' for {:?}", amount_str, op))?
        }
        _ => {
            return Err(format!(
                "{:?} for holder '{}' requires an amount",
                op, csv_record.holder
            ))
        }
    };

    Ok(OperationRecord {
        op,
        holder: csv_record.holder,
        amount,
    })
}

/// Write account states as CSV, one row per account in insertion order
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), BankError> {
    use csv::Writer;

    let write_failed = |what: &str, e: csv::Error| BankError::IoError {
        message: format!("Failed to write {}: {}", what, e),
    };

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["holder", "balance", "loan"])
        .map_err(|e| write_failed("CSV header", e))?;

    for account in accounts {
        writer
            .write_record(&[
                account.holder_name().to_string(),
                format!("{:.2}", account.balance()),
                format!("{:.2}", account.loan_balance()),
            ])
            .map_err(|e| write_failed("account record", e))?;
    }

    writer.flush()?;

    Ok(())
}
