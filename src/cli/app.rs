// ABOUTME: Main application orchestration for the scrivener CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        // Initialize logging
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting scrivener v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        // Execute the appropriate command
        match args.command {
            Commands::Draft {
                kind,
                matter,
                fields,
                issued_on,
                notice_date,
                window_days,
                output,
                format,
            } => {
                commands::draft_instrument(
                    kind,
                    matter,
                    fields,
                    issued_on,
                    notice_date,
                    window_days,
                    output,
                    format,
                    &self.config,
                )
                .await
            }

            Commands::Kinds => commands::list_kinds(),

            Commands::Check {
                kind,
                matter,
                fields,
            } => commands::check_matter(kind, matter, fields, &self.config).await,

            Commands::Deadlines { notice_date } => commands::compute_deadlines(notice_date),

            Commands::Init { name, output_dir } => commands::init_matter(name, output_dir).await,
        }
    }

    /// Create application from command line arguments
    pub async fn from_args() -> Result<Self> {
        let args = Args::parse_args();
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }
}
