use clap::{Parser, Subcommand};
use logweave_core::cli::{
    ConfigCmd, MetricsArgs, QueryArgs, ShowArgs, SourceArgs, TimelineArgs, check, dump,
    run_metrics, run_query, run_show, run_summary, run_timeline,
};
use logweave_core::logging::{OutputMode, init_logging};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "logweave",
    version,
    about = "Logweave: merge, filter and chart structured JSON logs"
)]
struct Cli {
    /// Path to the config file (defaults to ./logweave.hcl when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write results as JSON
    #[arg(long, global = true, conflicts_with = "pretty")]
    json: bool,

    /// Write results for a human reader
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Describe the merged dataset
    Summary {
        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Filter entries and print one page of matches
    Query {
        #[command(flatten)]
        sources: SourceArgs,

        #[command(flatten)]
        args: QueryArgs,
    },

    /// Volume and error counts per time bucket
    Timeline {
        #[command(flatten)]
        sources: SourceArgs,

        #[command(flatten)]
        args: TimelineArgs,
    },

    /// Downsampled performance metrics
    Metrics {
        #[command(flatten)]
        sources: SourceArgs,

        #[command(flatten)]
        args: MetricsArgs,
    },

    /// Print every field of a single entry
    Show {
        #[command(flatten)]
        sources: SourceArgs,

        #[command(flatten)]
        args: ShowArgs,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();
    let guard = init_logging();

    let mode = OutputMode::resolve(cli.json, cli.pretty);
    let config = cli.config.as_deref();

    let result = match cli.command {
        Command::Summary { sources } => run_summary(config, &sources, mode),
        Command::Query { sources, args } => run_query(config, &sources, &args, mode),
        Command::Timeline { sources, args } => run_timeline(config, &sources, &args, mode),
        Command::Metrics { sources, args } => run_metrics(config, &sources, &args, mode),
        Command::Show { sources, args } => run_show(config, &sources, &args),
        Command::Config { cmd } => match cmd {
            ConfigCmd::Check { path } => check(path.or_else(|| config.map(Path::to_path_buf))),
            ConfigCmd::Dump { path } => dump(path.or_else(|| config.map(Path::to_path_buf))),
        },
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("error: {e:#}");
        drop(guard);
        std::process::exit(1);
    }
}
