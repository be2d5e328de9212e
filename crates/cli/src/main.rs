mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{cmd_get, cmd_show};
use output::{OutputFormat, print_error};

/// Inspect the constants a Pear process derives from its mount and platform
#[derive(Parser)]
#[command(name = "pear-constants")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(flatten)]
  inputs: cmd::InputArgs,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print every derived constant
  Show {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Print a single constant by name (e.g. SOCKET_PATH)
  Get {
    /// Upper-case constant name
    name: String,
  },
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let cli = Cli::parse();

  if let Err(err) = run(cli) {
    print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let constants = cli.inputs.resolve()?;

  match cli.command {
    Commands::Show { format } => cmd_show(&constants, format),
    Commands::Get { name } => cmd_get(&constants, &name),
  }
}
