//! Function-tool surface for an external orchestrator
//!
//! The orchestrator registers `GetCountryVariations`, calls it with a country
//! name and hands the resulting names to its reasoner for grouping.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Result;
use crate::pipeline::{collect_variants, collect_variants_with_deadline};
use crate::source::LabelSource;
use crate::variants::VariantSet;

pub const TOOL_NAME: &str = "GetCountryVariations";
pub const TOOL_DESCRIPTION: &str = "Fetches the variations a country name has among other countries";

/// Tool arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCountryArgs {
    /// The name of the country to fetch variations for
    pub country: String,
}

/// Tool result: the unique canonical names, without script or casing metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryVariations {
    pub names: Vec<String>,
}

impl From<VariantSet> for CountryVariations {
    fn from(variants: VariantSet) -> Self {
        Self {
            names: variants.into_names(),
        }
    }
}

/// JSON declaration of the tool (name, description, parameter schema).
pub fn tool_declaration() -> serde_json::Value {
    json!({
        "name": TOOL_NAME,
        "description": TOOL_DESCRIPTION,
        "parameters": {
            "type": "object",
            "properties": {
                "country": {
                    "type": "string",
                    "description": "The name of the country to fetch variations for"
                }
            },
            "required": ["country"]
        }
    })
}

/// Run the tool against a label source.
pub async fn get_country_variations<S: LabelSource>(
    source: &S,
    args: GetCountryArgs,
) -> Result<CountryVariations> {
    let variants = collect_variants(source, &args.country).await?;
    Ok(report(&args.country, variants))
}

/// Run the tool, giving up once `deadline` elapses.
pub async fn get_country_variations_with_deadline<S: LabelSource>(
    source: &S,
    args: GetCountryArgs,
    deadline: Duration,
) -> Result<CountryVariations> {
    let variants = collect_variants_with_deadline(source, &args.country, deadline).await?;
    Ok(report(&args.country, variants))
}

fn report(country: &str, variants: VariantSet) -> CountryVariations {
    tracing::info!("Names fetched for {}: {}", country, variants.len());
    variants.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    #[test]
    fn test_declaration_shape() {
        let decl = tool_declaration();
        assert_eq!(decl["name"], "GetCountryVariations");
        assert_eq!(decl["parameters"]["required"][0], "country");
        assert_eq!(decl["parameters"]["properties"]["country"]["type"], "string");
    }

    #[test]
    fn test_args_from_json() {
        let args: GetCountryArgs = serde_json::from_str(r#"{"country": "Hungary"}"#).unwrap();
        assert_eq!(args.country, "Hungary");
    }

    #[test]
    fn test_result_json_shape() {
        let result = CountryVariations {
            names: vec!["spain".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "names": ["spain"] })
        );
    }

    #[tokio::test]
    async fn test_get_country_variations() {
        let source = StaticSource::new().with_entity("Hungary", ["Hungary", "Magyarország", "Ungarn"]);
        let args = GetCountryArgs {
            country: "Hungary".to_string(),
        };
        let mut names = get_country_variations(&source, args).await.unwrap().names;
        names.sort();
        assert_eq!(names, vec!["hungary", "magyarorszag", "ungarn"]);
    }

    #[tokio::test]
    async fn test_get_country_variations_with_deadline() {
        let source = StaticSource::new().with_entity("Chad", ["Chad", "Tchad", "TCHAD"]);
        let args = GetCountryArgs {
            country: "Chad".to_string(),
        };
        let mut names = get_country_variations_with_deadline(&source, args, Duration::from_secs(1))
            .await
            .unwrap()
            .names;
        names.sort();
        assert_eq!(names, vec!["chad", "tchad"]);
    }
}
