//! Wikidata label source for namefold
//!
//! Looks an entity up by its label in one language, constrained to a class
//! (countries by default), and returns every label the item carries in every
//! language.
//!
//! - **Query**: SPARQL construction with literal escaping
//! - **Response**: SPARQL JSON results parsing
//! - **Http**: reqwest client with User-Agent, timeout and status handling
//! - **Config**: endpoint, User-Agent, timeout, language, class

pub mod config;
pub mod http;
pub mod query;
pub mod response;
pub mod source;

pub use config::{ConfigError, WikidataConfig};
pub use http::HttpError;
pub use query::country_labels_query;
pub use response::parse_label_bindings;
pub use source::WikidataSource;
