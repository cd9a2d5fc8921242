//! HTTP backend for the hosted document store and file storage

use crate::media::{FileStorage, UploadResult};
use crate::store::{AddResult, Document, DocumentStore, Filter, RemoveResult, UpdateResult};
use crate::wire::{
    CountResponse, DataResponse, PageParams, QueryRequest, UpdateWhereRequest, UploadParams,
    WriteRequest,
};
use crate::{ClientConfig, StoreError, StoreResult};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// HTTP client implementing [`DocumentStore`] and [`FileStorage`]
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpStore {
    /// Create a new HTTP store from configuration
    pub fn new(config: &ClientConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn collection_url(&self, collection: &str, rest: &str) -> String {
        self.url(&format!("collections/{}/{}", collection, rest))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> StoreResult<T> {
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> StoreResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(StoreError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(StoreError::Invalid(text)),
                _ => Err(StoreError::Status {
                    status: status.as_u16(),
                    message: text,
                }),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl DocumentStore for HttpStore {
    async fn count(&self, collection: &str) -> StoreResult<u64> {
        let request = self.client.get(self.collection_url(collection, "count"));
        let response: CountResponse = self.send(request).await?;
        Ok(response.total)
    }

    async fn page(&self, collection: &str, skip: u64, limit: u64) -> StoreResult<Vec<Value>> {
        let request = self
            .client
            .get(self.collection_url(collection, "documents"))
            .query(&PageParams { skip, limit });
        let response: DataResponse = self.send(request).await?;
        Ok(response.data)
    }

    async fn query(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Value>> {
        let body = QueryRequest {
            filter: filter.clone(),
        };
        let request = self
            .client
            .post(self.collection_url(collection, "query"))
            .json(&body);
        let response: DataResponse = self.send(request).await?;
        Ok(response.data)
    }

    async fn add(&self, collection: &str, data: Document) -> StoreResult<AddResult> {
        let request = self
            .client
            .post(self.collection_url(collection, "documents"))
            .json(&WriteRequest { data });
        self.send(request).await
    }

    async fn update_doc(
        &self,
        collection: &str,
        id: &str,
        data: Document,
    ) -> StoreResult<UpdateResult> {
        let request = self
            .client
            .patch(self.collection_url(collection, &format!("documents/{}", id)))
            .json(&WriteRequest { data });
        self.send(request).await
    }

    async fn update_where(
        &self,
        collection: &str,
        filter: &Filter,
        data: Document,
    ) -> StoreResult<UpdateResult> {
        let body = UpdateWhereRequest {
            filter: filter.clone(),
            data,
        };
        let request = self
            .client
            .patch(self.collection_url(collection, "documents"))
            .json(&body);
        self.send(request).await
    }

    async fn remove_doc(&self, collection: &str, id: &str) -> StoreResult<RemoveResult> {
        let request = self
            .client
            .delete(self.collection_url(collection, &format!("documents/{}", id)));
        self.send(request).await
    }
}

#[async_trait]
impl FileStorage for HttpStore {
    async fn upload_file(&self, cloud_path: &str, file_path: &Path) -> StoreResult<UploadResult> {
        let bytes = tokio::fs::read(file_path).await?;
        tracing::debug!(cloud_path, size = bytes.len(), "Uploading file");
        let request = self
            .client
            .post(self.url("storage/upload"))
            .query(&UploadParams {
                cloud_path: cloud_path.to_string(),
            })
            .body(bytes);
        self.send(request).await
    }
}
