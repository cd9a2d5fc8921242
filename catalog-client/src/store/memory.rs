//! In-memory backend
//!
//! Collections live in insertion order behind a lock. Updates merge fields
//! into the existing document, matching the hosted store's update semantics.

use super::{AddResult, Document, DocumentStore, Filter, RemoveResult, UpdateResult};
use crate::media::{FileStorage, UploadResult};
use crate::StoreResult;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use shared::models::ID_FIELD;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// In-memory document store
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let collections = self.collections.read();
        let mut debug = f.debug_struct("MemoryStore");
        for (name, docs) in collections.iter() {
            debug.field(name, &docs.len());
        }
        debug.finish()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document as is, keeping its `_id` when it has one
    ///
    /// Returns the identifier of the stored document.
    pub fn seed(&self, collection: &str, document: Value) -> String {
        let mut doc = match document {
            Value::Object(map) => map,
            other => {
                let mut map = Document::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        let id = match doc.get(ID_FIELD).and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => new_id(),
        };
        doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        id
    }

    /// Snapshot of a collection
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Look up one document by identifier
    pub fn get(&self, collection: &str, id: &str) -> Option<Document> {
        self.collections
            .read()
            .get(collection)?
            .iter()
            .find(|doc| has_id(doc, id))
            .cloned()
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections.read().get(collection).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn has_id(doc: &Document, id: &str) -> bool {
    doc.get(ID_FIELD).and_then(Value::as_str) == Some(id)
}

/// Field-level merge; the identifier is never overwritten
fn merge(doc: &mut Document, data: &Document) {
    for (key, value) in data {
        if key != ID_FIELD {
            doc.insert(key.clone(), value.clone());
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn count(&self, collection: &str) -> StoreResult<u64> {
        Ok(self.len(collection) as u64)
    }

    async fn page(&self, collection: &str, skip: u64, limit: u64) -> StoreResult<Vec<Value>> {
        let collections = self.collections.read();
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .map(Value::Object)
            .collect())
    }

    async fn query(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Value>> {
        let collections = self.collections.read();
        Ok(collections
            .get(collection)
            .into_iter()
            .flatten()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .map(Value::Object)
            .collect())
    }

    async fn add(&self, collection: &str, mut data: Document) -> StoreResult<AddResult> {
        let id = new_id();
        data.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(data);
        tracing::debug!(collection, id = %id, "Document added");
        Ok(AddResult { id })
    }

    async fn update_doc(
        &self,
        collection: &str,
        id: &str,
        data: Document,
    ) -> StoreResult<UpdateResult> {
        let mut collections = self.collections.write();
        let target = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| has_id(doc, id)));
        let updated = match target {
            Some(doc) => {
                merge(doc, &data);
                1
            }
            None => 0,
        };
        Ok(UpdateResult { updated })
    }

    async fn update_where(
        &self,
        collection: &str,
        filter: &Filter,
        data: Document,
    ) -> StoreResult<UpdateResult> {
        let mut collections = self.collections.write();
        let mut updated = 0;
        for doc in collections.get_mut(collection).into_iter().flatten() {
            if filter.matches(doc) {
                merge(doc, &data);
                updated += 1;
            }
        }
        Ok(UpdateResult { updated })
    }

    async fn remove_doc(&self, collection: &str, id: &str) -> StoreResult<RemoveResult> {
        let mut collections = self.collections.write();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(RemoveResult::default());
        };
        let before = docs.len();
        docs.retain(|doc| !has_id(doc, id));
        Ok(RemoveResult {
            removed: (before - docs.len()) as u64,
        })
    }
}

/// In-memory file storage
///
/// Hands out `cloud://{env}/{path}` identifiers like the hosted storage does.
#[derive(Clone)]
pub struct MemoryFileStorage {
    env: String,
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl std::fmt::Debug for MemoryFileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryFileStorage")
            .field("env", &self.env)
            .field("files", &self.files.read().len())
            .finish()
    }
}

impl Default for MemoryFileStorage {
    fn default() -> Self {
        Self::new("taproom-dev.7461")
    }
}

impl MemoryFileStorage {
    /// `env` is the `<env>.<bucket>` host segment of issued file ids
    pub fn new(env: impl Into<String>) -> Self {
        Self {
            env: env.into(),
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store raw bytes under `cloud_path`
    pub fn put(&self, cloud_path: &str, bytes: Vec<u8>) -> UploadResult {
        let path = cloud_path.trim_start_matches('/');
        self.files.write().insert(path.to_string(), bytes);
        UploadResult {
            file_id: format!("cloud://{}/{}", self.env, path),
        }
    }

    /// Bytes stored under `cloud_path`
    pub fn file(&self, cloud_path: &str) -> Option<Vec<u8>> {
        self.files
            .read()
            .get(cloud_path.trim_start_matches('/'))
            .cloned()
    }
}

#[async_trait]
impl FileStorage for MemoryFileStorage {
    async fn upload_file(&self, cloud_path: &str, file_path: &Path) -> StoreResult<UploadResult> {
        let bytes = tokio::fs::read(file_path).await?;
        Ok(self.put(cloud_path, bytes))
    }
}
