use catalog_client::{MemoryFileStorage, MemoryStore, StoreError, StoreResult};
use serde_json::Value;

/// Shared state of the mock store
#[derive(Debug, Clone)]
pub struct MockState {
    pub store: MemoryStore,
    pub files: MemoryFileStorage,
    /// Required bearer token, `None` accepts every request
    pub token: Option<String>,
    /// Server-side cap on documents per page
    pub max_page_size: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            store: MemoryStore::new(),
            files: MemoryFileStorage::default(),
            token: None,
            max_page_size: catalog_client::config::DEFAULT_PAGE_SIZE,
        }
    }
}

impl MockState {
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Load documents from `{"<collection>": [ {..}, .. ], ..}`
    ///
    /// Returns the number of documents inserted.
    pub fn seed(&self, fixtures: Value) -> StoreResult<usize> {
        let Value::Object(collections) = fixtures else {
            return Err(StoreError::Invalid(
                "seed data must map collection names to arrays".to_string(),
            ));
        };

        let mut inserted = 0;
        for (collection, documents) in collections {
            let Value::Array(documents) = documents else {
                return Err(StoreError::Invalid(format!(
                    "seed collection '{}' is not an array",
                    collection
                )));
            };
            for document in documents {
                self.store.seed(&collection, document);
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}
