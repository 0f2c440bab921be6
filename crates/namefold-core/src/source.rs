//! Label source boundary
//!
//! A label source answers one question: which raw labels are known for an
//! entity name. The pipeline calls it exactly once per run, with no retries
//! and no caching.

use std::collections::HashMap;
use std::future::Future;

use crate::error::Result;

/// A provider of raw labels for a named entity.
///
/// Implementations return labels in source order. Zero labels is a valid
/// answer and means no variants are known. Transport failures map to
/// [`FetchError::SourceUnavailable`](crate::FetchError::SourceUnavailable),
/// unparseable answers to
/// [`FetchError::MalformedResponse`](crate::FetchError::MalformedResponse).
pub trait LabelSource {
    fn fetch_labels(&self, entity: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// In-memory label source keyed by exact entity name.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    labels: HashMap<String, Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the labels for an entity, replacing any previous entry.
    pub fn with_entity<I, S>(mut self, entity: &str, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels
            .insert(entity.to_string(), labels.into_iter().map(Into::into).collect());
        self
    }
}

impl LabelSource for StaticSource {
    async fn fetch_labels(&self, entity: &str) -> Result<Vec<String>> {
        Ok(self.labels.get(entity).cloned().unwrap_or_default())
    }
}
