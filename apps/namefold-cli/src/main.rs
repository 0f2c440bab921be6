//! namefold - country name variants from the command line
//!
//! Fetches every label Wikidata knows for a country and prints the distinct
//! spellings left after case folding, diacritic removal and punctuation
//! stripping, as `{"names": [...]}`.

mod commands;
mod config;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use namefold_wikidata::WikidataSource;
use tracing_subscriber::EnvFilter;

use commands::CliError;
use config::NamefoldConfig;

#[derive(Parser, Debug)]
#[command(name = "namefold", version, about = "Canonical country name variants")]
struct Cli {
    /// Config file (defaults to <config dir>/namefold/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the name variants of a country from Wikidata
    Variations {
        /// Country name as labelled in the configured language
        country: String,

        /// Print names in code point order
        #[arg(long)]
        sorted: bool,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// SPARQL endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Language tag of the country label
        #[arg(long)]
        language: Option<String>,
    },

    /// Canonicalize labels given as arguments, or one per line on stdin
    Canonicalize {
        labels: Vec<String>,

        /// Print names in code point order
        #[arg(long)]
        sorted: bool,
    },

    /// Print the GetCountryVariations function-tool declaration
    ToolSchema,

    /// Print the effective configuration as TOML
    ShowConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Reported once here; returning the error would also print its Debug form
    if let Err(err) = run(cli).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Variations {
            country,
            sorted,
            timeout,
            endpoint,
            language,
        } => {
            let mut config = NamefoldConfig::load(cli.config.as_deref())?;
            config.apply_env()?;
            config.apply_flags(timeout, endpoint, language, sorted);
            config.validate()?;

            let source = WikidataSource::new(config.wikidata.clone())?;
            commands::variations(&source, &country, &config.pipeline, &mut out).await
        }
        Command::Canonicalize { labels, sorted } => {
            commands::canonicalize(&labels, io::stdin().lock(), sorted, &mut out)
        }
        Command::ToolSchema => commands::tool_schema(&mut out),
        Command::ShowConfig => {
            let mut config = NamefoldConfig::load(cli.config.as_deref())?;
            config.apply_env()?;
            commands::show_config(&config, &mut out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_variations() {
        let cli = Cli::parse_from(["namefold", "variations", "Spain", "--sorted", "--timeout", "5"]);
        match cli.command {
            Command::Variations {
                country,
                sorted,
                timeout,
                ..
            } => {
                assert_eq!(country, "Spain");
                assert!(sorted);
                assert_eq!(timeout, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_canonicalize_without_labels() {
        let cli = Cli::parse_from(["namefold", "canonicalize"]);
        assert!(matches!(
            cli.command,
            Command::Canonicalize { ref labels, sorted: false } if labels.is_empty()
        ));
    }
}
