//! Document store abstraction
//!
//! The minimal surface of a hosted document database that the accessors use:
//! count, bounded pages, filtered reads and single-document writes.

mod memory;

pub use memory::{MemoryFileStorage, MemoryStore};

use crate::{StoreError, StoreResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw document as held by the store
pub type Document = Map<String, Value>;

/// Acknowledgement of an insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddResult {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Acknowledgement of an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateResult {
    pub updated: u64,
}

/// Acknowledgement of a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoveResult {
    pub removed: u64,
}

/// Remote document store
///
/// Implementations must be safe to call concurrently; the batched fetch keeps
/// several `page` calls in flight at once.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Total number of documents in a collection
    async fn count(&self, collection: &str) -> StoreResult<u64>;

    /// At most `limit` documents starting at offset `skip`, in store order
    async fn page(&self, collection: &str, skip: u64, limit: u64) -> StoreResult<Vec<Value>>;

    /// Documents matching `filter`
    async fn query(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Value>>;

    /// Insert a document, the store assigns its identifier
    async fn add(&self, collection: &str, data: Document) -> StoreResult<AddResult>;

    /// Merge `data` into the document with identifier `id`
    async fn update_doc(&self, collection: &str, id: &str, data: Document)
    -> StoreResult<UpdateResult>;

    /// Merge `data` into every document matching `filter`
    async fn update_where(
        &self,
        collection: &str,
        filter: &Filter,
        data: Document,
    ) -> StoreResult<UpdateResult>;

    /// Delete the document with identifier `id`
    async fn remove_doc(&self, collection: &str, id: &str) -> StoreResult<RemoveResult>;
}

/// Single field condition
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Eq { field: String, value: Value },
    In { field: String, values: Vec<Value> },
}

impl Condition {
    fn matches(&self, doc: &Document) -> bool {
        match self {
            Condition::Eq { field, value } => doc.get(field) == Some(value),
            Condition::In { field, values } => {
                doc.get(field).is_some_and(|v| values.contains(v))
            }
        }
    }
}

/// Conjunction of field conditions
///
/// JSON form: `{"field": value, "other": {"$in": [..]}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field == value`
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Eq {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Require `field` to be one of `values`
    pub fn is_in<V: Into<Value>>(
        mut self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.conditions.push(Condition::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// An empty filter matches every document
    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions.iter().all(|c| c.matches(doc))
    }
}

impl From<Filter> for Value {
    fn from(filter: Filter) -> Self {
        let mut map = Map::new();
        for condition in filter.conditions {
            match condition {
                Condition::Eq { field, value } => {
                    map.insert(field, value);
                }
                Condition::In { field, values } => {
                    let mut op = Map::new();
                    op.insert("$in".to_string(), Value::Array(values));
                    map.insert(field, Value::Object(op));
                }
            }
        }
        Value::Object(map)
    }
}

impl TryFrom<Value> for Filter {
    type Error = StoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(StoreError::Invalid("filter must be an object".to_string()));
        };

        let mut filter = Filter::new();
        for (field, condition) in map {
            match condition {
                Value::Object(mut op) if op.len() == 1 && op.contains_key("$in") => {
                    match op.remove("$in") {
                        Some(Value::Array(values)) => filter = filter.is_in(field, values),
                        _ => {
                            return Err(StoreError::Invalid(format!(
                                "$in on '{}' expects an array",
                                field
                            )));
                        }
                    }
                }
                value => filter = filter.eq(field, value),
            }
        }
        Ok(filter)
    }
}
