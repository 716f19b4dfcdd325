mod check;
mod completions;
mod describe;
mod generate;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use describe::DescribeCommand;
use eyre::Result;
use generate::GenerateCommand;
use tracing_subscriber::EnvFilter;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typebind_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "typebind")]
#[command(version)]
#[command(about = "Generate TypeScript and Python bindings from host schema types")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.init_logging();

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Describe(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    /// Logs go to stderr so previews on stdout stay clean. `RUST_LOG` wins
    /// over `-v`.
    fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .try_init();
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bindings from typebind.toml
    Generate(GenerateCommand),

    /// Validate typebind.toml and its registry without generating
    Check(CheckCommand),

    /// Print the descriptor extracted for a single type as JSON
    Describe(DescribeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
