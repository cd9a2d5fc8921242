//! Catalog Accessor - goods reads and mutations
//!
//! Reads come back annotated (tag list, display name) and, for the full
//! listing, sorted for display. Mutations are single-document passthroughs.

use crate::batch::fetch_all;
use crate::error::collapse;
use crate::store::{AddResult, Document, DocumentStore, Filter, RemoveResult, UpdateResult};
use crate::{ClientConfig, StoreError};
use serde_json::Value;
use shared::models::ID_FIELD;
use shared::{
    AnnotatedItem, CatalogError, CatalogResult, Category, Item, annotate, resolve_url_with,
    sort_items,
};
use std::sync::Arc;

pub const GOODS_COLLECTION: &str = "goods";

/// What `remove_item` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Beer is only ever taken off (or put back on) the shelf
    Toggled { hide: bool, result: UpdateResult },
    /// Everything else is deleted
    Deleted(RemoveResult),
}

/// Accessor for the `goods` collection
#[derive(Clone)]
pub struct CatalogAccessor {
    store: Arc<dyn DocumentStore>,
    page_size: u64,
    domain_suffix: String,
}

impl std::fmt::Debug for CatalogAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogAccessor")
            .field("page_size", &self.page_size)
            .field("domain_suffix", &self.domain_suffix)
            .finish()
    }
}

impl CatalogAccessor {
    pub fn new(store: Arc<dyn DocumentStore>, config: &ClientConfig) -> Self {
        Self {
            store,
            page_size: config.page_size.max(1),
            domain_suffix: config.domain_suffix.clone(),
        }
    }

    /// Every item, annotated and in display order
    pub async fn get_all(&self) -> CatalogResult<Vec<AnnotatedItem>> {
        let documents = fetch_all(self.store.as_ref(), GOODS_COLLECTION, self.page_size)
            .await
            .map_err(collapse(CatalogError::QueryFailed, "get_all"))?;

        let mut items = documents
            .into_iter()
            .map(|doc| decode(doc).map(|item| annotate(&item)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(collapse(CatalogError::QueryFailed, "get_all"))?;
        sort_items(&mut items);

        tracing::info!(count = items.len(), "Goods loaded");
        Ok(items)
    }

    /// One item by identifier, annotated
    pub async fn get_detail(&self, id: &str) -> CatalogResult<AnnotatedItem> {
        let filter = Filter::new().eq(ID_FIELD, id);
        let documents = self
            .store
            .query(GOODS_COLLECTION, &filter)
            .await
            .map_err(collapse(CatalogError::QueryFailed, "get_detail"))?;

        let document = documents
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("goods {}", id)))
            .map_err(collapse(CatalogError::QueryFailed, "get_detail"))?;
        let item = decode(document).map_err(collapse(CatalogError::QueryFailed, "get_detail"))?;
        Ok(annotate(&item))
    }

    /// Create an item, the store assigns its identifier
    pub async fn add_item(&self, item: &Item) -> CatalogResult<AddResult> {
        let result = async {
            let data = item.write_fields()?;
            self.store.add(GOODS_COLLECTION, data).await
        }
        .await
        .map_err(collapse(CatalogError::CreateFailed, "add_item"))?;

        tracing::info!(id = %result.id, category = %item.category, "Item added");
        Ok(result)
    }

    /// Take a beer off the shelf (or back on), delete anything else
    pub async fn remove_item(&self, item: &Item) -> CatalogResult<RemoveOutcome> {
        if item.category == Category::Beer {
            let hide = !item.is_hidden();
            let mut data = Document::new();
            data.insert("hide".to_string(), Value::Bool(hide));

            let result = async {
                let id = require_id(item)?;
                self.store.update_doc(GOODS_COLLECTION, id, data).await
            }
            .await
            .map_err(collapse(CatalogError::HideFailed, "remove_item"))?;

            tracing::info!(id = ?item.id, hide, "Beer shelf state toggled");
            Ok(RemoveOutcome::Toggled { hide, result })
        } else {
            let result = async {
                let id = require_id(item)?;
                self.store.remove_doc(GOODS_COLLECTION, id).await
            }
            .await
            .map_err(collapse(CatalogError::DeleteFailed, "remove_item"))?;

            tracing::info!(id = ?item.id, "Item deleted");
            Ok(RemoveOutcome::Deleted(result))
        }
    }

    /// Write every field of `item` except its identifier and ownership marker
    pub async fn replace_item(&self, item: &Item) -> CatalogResult<UpdateResult> {
        let result = async {
            let id = require_id(item)?;
            let data = item.write_fields()?;
            self.store.update_doc(GOODS_COLLECTION, id, data).await
        }
        .await
        .map_err(collapse(CatalogError::UpdateFailed, "replace_item"))?;

        tracing::info!(id = ?item.id, updated = result.updated, "Item replaced");
        Ok(result)
    }

    /// Public URL for a storage link
    pub fn get_url(&self, link: &str) -> String {
        resolve_url_with(link, &self.domain_suffix)
    }
}

fn decode(document: Value) -> Result<Item, StoreError> {
    let mut item: Item = serde_json::from_value(document)?;
    item.strip_derived();
    Ok(item)
}

fn require_id(item: &Item) -> Result<&str, StoreError> {
    item.id
        .as_deref()
        .ok_or_else(|| StoreError::Invalid("item has no identifier".to_string()))
}
