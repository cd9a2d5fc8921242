//! HTTP wire format of the document store
//!
//! | method | path | body | response |
//! |--------|------|------|----------|
//! | GET | `/collections/{c}/count` | | [`CountResponse`] |
//! | GET | `/collections/{c}/documents?skip=&limit=` | | [`DataResponse`] |
//! | POST | `/collections/{c}/query` | [`QueryRequest`] | [`DataResponse`] |
//! | POST | `/collections/{c}/documents` | [`WriteRequest`] | `AddResult` |
//! | PATCH | `/collections/{c}/documents/{id}` | [`WriteRequest`] | `UpdateResult` |
//! | PATCH | `/collections/{c}/documents` | [`UpdateWhereRequest`] | `UpdateResult` |
//! | DELETE | `/collections/{c}/documents/{id}` | | `RemoveResult` |
//! | POST | `/storage/upload?cloudPath=` | raw bytes | `UploadResult` |

use crate::store::{Document, Filter};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub total: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataResponse {
    pub data: Vec<Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub skip: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(rename = "where")]
    pub filter: Filter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteRequest {
    pub data: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWhereRequest {
    #[serde(rename = "where")]
    pub filter: Filter,
    pub data: Document,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadParams {
    #[serde(rename = "cloudPath")]
    pub cloud_path: String,
}
