//! Alsvid Command-Line Interface
//!
//! Local optimizer for reversible-gate assembly: cancels adjacent
//! CNOT/Toffoli pairs and folds swap-equivalent CNOT triples into wire
//! relabelings, leaving every other gate untouched.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{check, optimize, version};

/// Alsvid - local optimizer for reversible-gate assembly
#[derive(Parser)]
#[command(name = "alsvid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a circuit and emit the rewritten assembly
    Optimize {
        /// Input file ('-' for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Write a JSON optimization report
        #[arg(long)]
        report: Option<String>,
    },

    /// Parse and validate a circuit without optimizing
    Check {
        /// Input file ('-' for stdin)
        #[arg(short, long)]
        input: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging. The optimized program goes to stdout, so logs and
    // status lines stay on stderr.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Optimize {
            input,
            output,
            report,
        } => optimize::execute(&input, output.as_deref(), report.as_deref()),

        Commands::Check { input } => check::execute(&input),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
