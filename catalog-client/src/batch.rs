//! Batched full-collection fetch
//!
//! The hosted store caps the number of documents per query. Reading a whole
//! collection means counting it, then issuing one bounded page query per
//! batch. Pages are requested concurrently and reassembled in offset order.

use crate::store::DocumentStore;
use crate::{StoreError, StoreResult};
use futures::future::try_join_all;
use serde_json::Value;

/// Offsets of the pages needed to cover `total` documents
pub fn page_offsets(total: u64, page_size: u64) -> Vec<u64> {
    let page_size = page_size.max(1);
    (0..total.div_ceil(page_size))
        .map(|batch| batch * page_size)
        .collect()
}

/// Every document of `collection`, in store order
///
/// All-or-nothing: the first failing page fails the whole fetch, and so
/// does a merged result shorter or longer than the counted total (the store
/// capped pages below `page_size`, or the collection changed mid-fetch).
/// An empty collection issues no page query.
pub async fn fetch_all(
    store: &dyn DocumentStore,
    collection: &str,
    page_size: u64,
) -> StoreResult<Vec<Value>> {
    let page_size = page_size.max(1);
    let total = store.count(collection).await?;
    let offsets = page_offsets(total, page_size);
    tracing::debug!(collection, total, pages = offsets.len(), "Fetching collection");

    let pages = try_join_all(
        offsets
            .into_iter()
            .map(|skip| store.page(collection, skip, page_size)),
    )
    .await?;

    let documents: Vec<Value> = pages.into_iter().flatten().collect();
    if documents.len() as u64 != total {
        tracing::warn!(
            collection,
            total,
            fetched = documents.len(),
            page_size,
            "Fetched document count does not match the collection count"
        );
        return Err(StoreError::Invalid(format!(
            "collection '{}' returned {} of {} documents",
            collection,
            documents.len(),
            total
        )));
    }
    Ok(documents)
}
