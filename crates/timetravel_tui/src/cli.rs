//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Time-travel tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with a move history you can jump through", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File that receives log output (the terminal is busy drawing)
    #[arg(long, default_value = "timetravel_tui.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["timetravel"]);
        assert_eq!(cli.log_file, PathBuf::from("timetravel_tui.log"));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["timetravel", "--log-file", "/tmp/t.log", "--log-level", "debug"]);
        assert_eq!(cli.log_file, PathBuf::from("/tmp/t.log"));
        assert_eq!(cli.log_level, "debug");
    }
}
