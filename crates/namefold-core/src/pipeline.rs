//! Fetch, canonicalize and collect
//!
//! One run fetches the labels for an entity once and folds them into a fresh
//! [`VariantSet`]. Fetch failures end the run; nothing after the fetch can fail.

use std::time::Duration;

use crate::error::{FetchError, Result};
use crate::source::LabelSource;
use crate::variants::{deduplicate, VariantSet};

/// Collect the name variants of `entity` from `source`.
pub async fn collect_variants<S: LabelSource>(source: &S, entity: &str) -> Result<VariantSet> {
    let entity = validate_entity(entity)?;
    let labels = source
        .fetch_labels(entity)
        .await
        .inspect_err(|e| tracing::warn!("Label fetch for {:?} failed: {}", entity, e))?;

    Ok(fold_labels(entity, labels))
}

/// Like [`collect_variants`], but gives up on the fetch once `deadline`
/// elapses and reports the source as unavailable.
pub async fn collect_variants_with_deadline<S: LabelSource>(
    source: &S,
    entity: &str,
    deadline: Duration,
) -> Result<VariantSet> {
    let entity = validate_entity(entity)?;
    let labels = match tokio::time::timeout(deadline, source.fetch_labels(entity)).await {
        Ok(result) => result
            .inspect_err(|e| tracing::warn!("Label fetch for {:?} failed: {}", entity, e))?,
        Err(_) => {
            tracing::warn!("Label fetch for {:?} exceeded {:?}", entity, deadline);
            return Err(FetchError::unavailable(format!(
                "fetch for {:?} did not finish within {:?}",
                entity, deadline
            )));
        }
    };

    Ok(fold_labels(entity, labels))
}

fn validate_entity(entity: &str) -> Result<&str> {
    if entity.trim().is_empty() {
        return Err(FetchError::InvalidEntity);
    }
    Ok(entity)
}

fn fold_labels(entity: &str, labels: Vec<String>) -> VariantSet {
    let variants = deduplicate(&labels);
    tracing::debug!(
        "Folded {} labels for {:?} into {} variants",
        labels.len(),
        entity,
        variants.len()
    );
    variants
}
