//! Vaccine inventory command-line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vaxtrack::cli::{output, report, summary, validate};
use vaxtrack::loader::{DATA_DIR_ENV, DEFAULT_DATA_DIR};
use vaxtrack::DataSources;

/// Vaccine inventory tool
#[derive(Parser)]
#[command(name = "vaxtrack")]
#[command(author, version, about = "Vaccine bottle inventory and expiration reports", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, table, pretty)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    /// Directory holding the standard data files
    #[arg(short = 'd', long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR, global = true)]
    data_dir: PathBuf,

    /// Bottle files, replacing the ones in the data directory
    #[arg(short, long = "bottles", global = true)]
    bottles: Vec<PathBuf>,

    /// Administration file, replacing the one in the data directory
    #[arg(short, long, global = true)]
    administrations: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report inventory figures as of a point in time
    Report {
        /// Query time (2021-04-12T11:10:06Z, 2021-04-12 11:10 or 2021-04-12)
        #[arg(short = 't', long)]
        at: String,

        /// Number of consecutive daily reports
        #[arg(short = 'n', long, default_value_t = 1)]
        days: u32,
    },

    /// Summarize the loaded data
    Summary,

    /// Check the data files for malformed or inconsistent records
    Validate {
        /// Strict mode (warnings as errors)
        #[arg(short, long)]
        strict: bool,
    },
}

impl Cli {
    fn sources(&self) -> DataSources {
        let sources = DataSources::in_dir(&self.data_dir).with_bottle_files(self.bottles.clone());
        match &self.administrations {
            Some(file) => sources.with_administration_file(file.clone()),
            None => sources,
        }
    }
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let sources = cli.sources();

    let result = match cli.command {
        Commands::Report { at, days } => {
            let config = report::ReportConfig {
                sources,
                at,
                days,
                verbose: cli.verbose,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            report::report(config)
        }

        Commands::Summary => {
            let config = summary::SummaryConfig {
                sources,
                verbose: cli.verbose,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            summary::summary(config)
        }

        Commands::Validate { strict } => {
            let config = validate::ValidateConfig {
                sources,
                strict,
                verbose: cli.verbose,
            };
            validate::validate(config)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
