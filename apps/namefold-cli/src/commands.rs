//! Subcommand implementations
//!
//! Each command writes its JSON output to the given writer so it can be
//! exercised without a terminal.

use std::io::{BufRead, Write};

use namefold_core::{
    deduplicate, get_country_variations_with_deadline, tool_declaration, CountryVariations,
    FetchError, GetCountryArgs, LabelSource,
};
use thiserror::Error;

use crate::config::{ConfigError, NamefoldConfig, PipelineConfig};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Could not create HTTP client: {0}")]
    Http(#[from] namefold_wikidata::HttpError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fetch and print the name variants of `country`.
pub async fn variations<S, W>(
    source: &S,
    country: &str,
    pipeline: &PipelineConfig,
    out: &mut W,
) -> Result<(), CliError>
where
    S: LabelSource,
    W: Write,
{
    let args = GetCountryArgs {
        country: country.to_string(),
    };
    let result = get_country_variations_with_deadline(source, args, pipeline.deadline()).await?;
    write_variants(out, result, pipeline.sorted)
}

/// Canonicalize the given labels, or stdin lines when none are given.
pub fn canonicalize<R, W>(
    labels: &[String],
    input: R,
    sorted: bool,
    out: &mut W,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let variants = if labels.is_empty() {
        let lines = input.lines().collect::<Result<Vec<_>, _>>()?;
        deduplicate(&lines)
    } else {
        deduplicate(labels)
    };
    write_variants(out, variants.into(), sorted)
}

/// Print the `GetCountryVariations` function-tool declaration.
pub fn tool_schema<W: Write>(out: &mut W) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, &tool_declaration())?;
    writeln!(out)?;
    Ok(())
}

/// Print the effective configuration.
pub fn show_config<W: Write>(config: &NamefoldConfig, out: &mut W) -> Result<(), CliError> {
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}

fn write_variants<W: Write>(
    out: &mut W,
    mut result: CountryVariations,
    sorted: bool,
) -> Result<(), CliError> {
    if sorted {
        result.names.sort_unstable();
    }
    serde_json::to_writer_pretty(&mut *out, &result)?;
    writeln!(out)?;
    Ok(())
}
