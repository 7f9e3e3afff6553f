use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{batch::BatchArgs, catalog::CatalogArgs, quote::QuoteArgs};

mod batch;
mod catalog;
mod file_utils;
mod quote;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum delivery cost of a single order
    #[command(visible_alias = "q")]
    Quote {
        #[command(flatten)]
        args: QuoteArgs,
    },
    /// Minimum delivery cost of every order in a folder
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },
    /// Print the active catalog as JSON
    Catalog {
        #[command(flatten)]
        args: CatalogArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Quote { args } => quote::run(args)?,
        Commands::Batch { args } => batch::run(args)?,
        Commands::Catalog { args } => catalog::run(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from([
            "courier", "--debug", "q", "-i", "order.json", "--strategy", "linear_start", "--legs",
        ])
        .unwrap();

        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Quote { .. }));
    }

    #[test]
    fn test_json_and_legs_conflict() {
        let result = Cli::try_parse_from(["courier", "quote", "-i", "-", "--json", "--legs"]);
        assert!(result.is_err());
    }
}
