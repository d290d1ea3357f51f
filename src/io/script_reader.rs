//! Streaming reader over operation scripts
//!
//! Provides an iterator over operation records from a CSV script file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use rust_banking_simulator::io::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Operation: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as `BankError::ParseError` with the
//!   physical line number the row ends on (blank lines are counted even
//!   though the CSV reader skips them), and iteration continues with the
//!   next row

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{BankError, OperationRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

#[derive(Debug)]
pub struct ScriptReader {
    reader: csv::Reader<File>,
    /// Script length in bytes
    len: u64,
    /// The last line has no terminator, so reaching `len` does not bump the
    /// reader's line count
    unterminated_tail: bool,
}

fn ends_without_newline(file: &mut File, len: u64) -> std::io::Result<bool> {
    if len == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    file.rewind()?;
    Ok(last[0] != b'\n')
}

impl ScriptReader {
    /// Open a script file for streaming iteration
    ///
    /// The CSV reader trims whitespace from all fields and tolerates rows
    /// with a missing trailing amount field.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if nothing exists at `path`
    /// - `IoError` for any other failure opening the file
    pub fn new(path: &Path) -> Result<Self, BankError> {
        let mut file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BankError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => BankError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let read_failed = |e: std::io::Error| BankError::IoError {
            message: format!("Failed to read file '{}': {}", path.display(), e),
        };
        let len = file.metadata().map_err(read_failed)?.len();
        let unterminated_tail = ends_without_newline(&mut file, len).map_err(read_failed)?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            len,
            unterminated_tail,
        })
    }

    /// Physical line of the row just read
    ///
    /// The reader's position sits just past the row's terminator, one line
    /// below the row, except for an unterminated last line.
    fn last_row_line(&self) -> u64 {
        let end = self.reader.position();
        if self.unterminated_tail && end.byte() == self.len {
            end.line()
        } else {
            end.line().saturating_sub(1)
        }
    }
}

impl Iterator for ScriptReader {
    type Item = Result<OperationRecord, BankError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.reader.deserialize::<CsvRecord>().next()?;

        let line = Some(self.last_row_line());
        Some(match row {
            Ok(csv_record) => {
                convert_csv_record(csv_record).map_err(|e| BankError::parse_error(line, e))
            }
            Err(e) => Err(BankError::parse_error(line, e.to_string())),
        })
    }
}
