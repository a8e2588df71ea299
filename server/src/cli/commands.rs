// server/src/cli/commands.rs

// Command-line arguments for medtrack-cli, parsed with `clap`.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "medtrack-cli")]
#[command(version = "0.1.0")]
#[command(about = "Interactive medication tracking for patients, doctors, medications and prescriptions")]
pub struct CliArgs {
    /// TOML file with restock range, deletion policy and report placeholder.
    #[arg(long, short = 'c', env = "MEDTRACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible restock amounts.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter such as `info` or `medtrack_lib=debug`. Falls back to RUST_LOG, then `warn`.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_all_flags() {
        let args = CliArgs::try_parse_from([
            "medtrack-cli",
            "--config",
            "tracker.toml",
            "--seed",
            "7",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("tracker.toml")));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn should_reject_non_numeric_seed() {
        assert!(CliArgs::try_parse_from(["medtrack-cli", "--seed", "abc"]).is_err());
    }
}
