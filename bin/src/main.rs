//! ppr CLI - Download and filter Ireland's Property Price Register.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod args;
mod commands;
mod display;

use args::{ClientArgs, FilterArgs, OutputArgs};

#[derive(Parser)]
#[command(name = "ppr")]
#[command(about = "Download and filter Ireland's Property Price Register", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the whole register and filter it
    Get {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        client: ClientArgs,
    },

    /// Download one county's sales for one month
    Month {
        /// County name (e.g., Carlow, dublin)
        county: String,

        /// Year of sale
        year: i32,

        /// Month of sale (1-12)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        client: ClientArgs,
    },

    /// List the counties in the register
    Counties {
        /// Filter by province (connacht, leinster, munster, ulster)
        #[arg(short, long)]
        province: Option<String>,
    },
}

/// Installs the tracing subscriber. `RUST_LOG` overrides the verbosity flags.
fn init_logging(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Get {
            filter,
            output,
            client,
        } => commands::get::get(&filter, &output, &client, cli.quiet),
        Commands::Month {
            county,
            year,
            month,
            filter,
            output,
            client,
        } => commands::month::month(&county, year, month, &filter, &output, &client, cli.quiet),
        Commands::Counties { province } => commands::counties::list_counties(province.as_deref()),
    }
}
