// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for scrivener

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::instrument::InstrumentKind;

#[derive(Parser)]
#[command(name = "scrivener")]
#[command(about = "A CLI drafting engine that renders legal notice instruments from matter files")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an instrument from a matter file
    Draft {
        #[arg(help = "Instrument kind (short code like CA, or slug like conditional-acceptance)")]
        kind: InstrumentKind,

        #[arg(short, long, help = "Path to matter YAML/JSON file")]
        matter: Option<PathBuf>,

        #[arg(
            short = 'F',
            long = "field",
            help = "Override matter fields (key=value)"
        )]
        fields: Vec<String>,

        #[arg(long, help = "Letterhead date stamp (YYYY-MM-DD, defaults to today)")]
        issued_on: Option<NaiveDate>,

        #[arg(long, help = "Date the prior notice was served, for deadline computation")]
        notice_date: Option<NaiveDate>,

        #[arg(long, help = "Override the kind's default response window in days")]
        window_days: Option<i64>,

        #[arg(short, long, help = "Output file path ('-' for stdout)")]
        output: Option<PathBuf>,

        #[arg(long, help = "Output format (text or json)", default_value = "text")]
        format: String,
    },

    /// List every instrument kind with its code and family
    Kinds,

    /// Report which fields of a matter file will render as placeholders
    Check {
        #[arg(help = "Instrument kind to check against")]
        kind: InstrumentKind,

        #[arg(short, long, help = "Path to matter YAML/JSON file")]
        matter: Option<PathBuf>,

        #[arg(
            short = 'F',
            long = "field",
            help = "Override matter fields (key=value)"
        )]
        fields: Vec<String>,
    },

    /// Compute the 10-day and 28-day response windows for a notice date
    Deadlines {
        #[arg(help = "Date the notice was served (YYYY-MM-DD)")]
        notice_date: NaiveDate,
    },

    /// Initialize a new matter file with every field scaffolded
    Init {
        #[arg(help = "Name of the matter file to create")]
        name: String,

        #[arg(short, long, help = "Output directory", default_value = ".")]
        output_dir: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_command_parsing() {
        let args = Args::parse_from([
            "scrivener",
            "draft",
            "CA",
            "--field",
            "man_name=John Henry",
            "--notice-date",
            "2024-01-01",
        ]);

        match args.command {
            Commands::Draft {
                kind,
                fields,
                notice_date,
                ..
            } => {
                assert_eq!(kind, InstrumentKind::ConditionalAcceptance);
                assert_eq!(fields, vec!["man_name=John Henry".to_string()]);
                assert_eq!(
                    notice_date,
                    Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
                );
            }
            _ => panic!("expected draft command"),
        }
    }

    #[test]
    fn test_kind_parses_by_slug() {
        let args = Args::parse_from(["scrivener", "draft", "proof-of-funds"]);
        match args.command {
            Commands::Draft { kind, .. } => assert_eq!(kind, InstrumentKind::ProofOfFunds),
            _ => panic!("expected draft command"),
        }
    }

    #[test]
    fn test_invalid_kind_rejected() {
        let result = Args::try_parse_from(["scrivener", "draft", "subpoena"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_deadlines_command_parsing() {
        let args = Args::parse_from(["scrivener", "deadlines", "2024-12-25"]);
        match args.command {
            Commands::Deadlines { notice_date } => {
                assert_eq!(notice_date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
            }
            _ => panic!("expected deadlines command"),
        }
    }
}
