//! SPARQL JSON results parsing
//!
//! Format: https://www.w3.org/TR/sparql11-results-json/

use namefold_core::FetchError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    bindings: Vec<SparqlBinding>,
}

#[derive(Debug, Deserialize)]
struct SparqlBinding {
    label: Option<BindingValue>,
}

#[derive(Debug, Deserialize)]
struct BindingValue {
    value: String,
}

/// Extract the `?label` values from a SPARQL JSON response, in response order.
///
/// Rows without a `label` binding are skipped. Anything that is not a SPARQL
/// results document is a [`FetchError::MalformedResponse`].
pub fn parse_label_bindings(json: &str) -> Result<Vec<String>, FetchError> {
    let response: SparqlResponse = serde_json::from_str(json)
        .map_err(|e| FetchError::malformed(format!("Invalid SPARQL JSON: {}", e)))?;

    Ok(response
        .results
        .bindings
        .into_iter()
        .filter_map(|b| b.label.map(|l| l.value))
        .collect())
}
