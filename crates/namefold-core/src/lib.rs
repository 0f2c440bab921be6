//! namefold-core: canonical name variants for multilingual entity labels
//!
//! This crate turns the raw labels known for an entity (a country name in
//! dozens of languages and scripts) into the set of distinct surface spellings
//! left once case, diacritics and punctuation are ignored:
//!
//! - **Canonical**: case fold, NFD, strip nonspacing marks, NFC, keep letters
//! - **Variants**: deduplicate canonical names into a [`VariantSet`]
//! - **Source**: the [`LabelSource`] boundary the labels come from
//! - **Pipeline**: fetch once, canonicalize, collect
//! - **Tool**: the `GetCountryVariations` function-tool surface
//!
//! ```
//! use namefold_core::deduplicate;
//!
//! let variants = deduplicate(["Spain", "España", "Spanien", "ESPAÑA"]);
//! assert_eq!(variants.into_sorted_names(), vec!["espana", "spain", "spanien"]);
//! ```

pub mod canonical;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod tool;
pub mod variants;

pub use canonical::canonicalize;
pub use error::{FetchError, Result};
pub use pipeline::{collect_variants, collect_variants_with_deadline};
pub use source::{LabelSource, StaticSource};
pub use tool::{
    get_country_variations, get_country_variations_with_deadline, tool_declaration,
    CountryVariations, GetCountryArgs,
};
pub use variants::{deduplicate, VariantSet};
