use clap::Parser;
use std::path::PathBuf;

/// In-memory banking simulator
#[derive(Parser, Debug)]
#[command(name = "bank-sim")]
#[command(about = "Replay banking operations or run the built-in demo", long_about = None)]
pub struct CliArgs {
    /// CSV script of operations; the demo runs when omitted
    #[arg(
        value_name = "SCRIPT",
        help = "Path to a CSV script (op,holder,amount). Runs the demo when omitted"
    )]
    pub script: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// Default log filter derived from `--verbose`
    ///
    /// `RUST_LOG`, when set, takes precedence over this value.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
