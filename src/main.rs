//! Banking simulator CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run                              # scripted Alice/Bob demo
//! cargo run -- operations.csv > out.csv  # replay a script, print accounts
//! cargo run -- -vv operations.csv        # same, with debug logging on stderr
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output failure)

use rust_banking_simulator::cli;
use rust_banking_simulator::driver;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args);

    let mut output = std::io::stdout();
    let result = match &args.script {
        Some(path) => driver::run_script(path, &mut output).map(|_| ()),
        None => driver::run_demo(&mut output).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
