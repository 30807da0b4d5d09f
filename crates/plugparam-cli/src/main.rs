//! Plugparam CLI - inspect parameter layouts and convert values.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plugparam")]
#[command(author, version, about = "Plugin parameter layout tool", long_about = None)]
struct Cli {
    /// Increase log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the parameters of a layout
    List(commands::list::ListArgs),

    /// Convert between actual and normalized values
    Convert(commands::convert::ConvertArgs),

    /// Show how a value moves when the range changes
    Remap(commands::remap::RemapArgs),

    /// Validate a layout file
    Check(commands::check::CheckArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::List(args) => commands::list::run(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Remap(args) => commands::remap::run(args),
        Commands::Check(args) => commands::check::run(args),
    }
}
