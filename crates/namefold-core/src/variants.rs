//! Deduplication of canonical names into a variant set

use std::collections::hash_set;
use std::collections::HashSet;

use serde::Serialize;

use crate::canonical::canonicalize;

/// The distinct canonical names produced for one entity.
///
/// Never contains the empty string. Iteration order is unspecified; use
/// [`VariantSet::into_sorted_names`] when a stable presentation order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariantSet {
    names: HashSet<String>,
}

impl VariantSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalize a raw label and add it.
    ///
    /// Returns `true` if a new name was added. Labels that canonicalize to
    /// the empty string are dropped and return `false`.
    pub fn insert_raw(&mut self, raw: &str) -> bool {
        let name = canonicalize(raw);
        if name.is_empty() {
            return false;
        }
        self.names.insert(name)
    }

    /// Check for a canonical name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Consume the set, yielding its names in unspecified order.
    pub fn into_names(self) -> Vec<String> {
        self.names.into_iter().collect()
    }

    /// Consume the set, yielding its names in code point order.
    pub fn into_sorted_names(self) -> Vec<String> {
        let mut names = self.into_names();
        names.sort_unstable();
        names
    }
}

impl<S: AsRef<str>> Extend<S> for VariantSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, labels: I) {
        for label in labels {
            self.insert_raw(label.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for VariantSet {
    fn from_iter<I: IntoIterator<Item = S>>(labels: I) -> Self {
        let mut set = VariantSet::new();
        set.extend(labels);
        set
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

/// Canonicalize every raw label and keep the distinct non-empty results.
///
/// ```
/// use namefold_core::deduplicate;
///
/// let variants = deduplicate(["Spain", "SPAIN", "España", "Spain!"]);
/// assert_eq!(variants.len(), 2);
/// assert!(variants.contains("spain"));
/// assert!(variants.contains("espana"));
/// ```
pub fn deduplicate<I, S>(labels: I) -> VariantSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels.into_iter().collect()
}
