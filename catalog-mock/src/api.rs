use crate::state::MockState;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use catalog_client::store::{AddResult, DocumentStore, RemoveResult, UpdateResult};
use catalog_client::wire::{
    CountResponse, DataResponse, PageParams, QueryRequest, UpdateWhereRequest, UploadParams,
    WriteRequest,
};
use catalog_client::{StoreError, UploadResult};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Handler error, rendered as a status code and plain-text message
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("missing or invalid bearer token")]
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Invalid(_) | StoreError::Serialization(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

async fn count(
    State(state): State<MockState>,
    Path(collection): Path<String>,
) -> ApiResult<CountResponse> {
    let total = state.store.count(&collection).await?;
    Ok(Json(CountResponse { total }))
}

async fn page(
    State(state): State<MockState>,
    Path(collection): Path<String>,
    Query(params): Query<PageParams>,
) -> ApiResult<DataResponse> {
    let limit = params.limit.min(state.max_page_size);
    let data = state.store.page(&collection, params.skip, limit).await?;
    Ok(Json(DataResponse { data }))
}

async fn query(
    State(state): State<MockState>,
    Path(collection): Path<String>,
    Json(req): Json<QueryRequest>,
) -> ApiResult<DataResponse> {
    let data = state.store.query(&collection, &req.filter).await?;
    Ok(Json(DataResponse { data }))
}

async fn add(
    State(state): State<MockState>,
    Path(collection): Path<String>,
    Json(req): Json<WriteRequest>,
) -> ApiResult<AddResult> {
    Ok(Json(state.store.add(&collection, req.data).await?))
}

async fn update_where(
    State(state): State<MockState>,
    Path(collection): Path<String>,
    Json(req): Json<UpdateWhereRequest>,
) -> ApiResult<UpdateResult> {
    Ok(Json(
        state
            .store
            .update_where(&collection, &req.filter, req.data)
            .await?,
    ))
}

async fn update_doc(
    State(state): State<MockState>,
    Path((collection, id)): Path<(String, String)>,
    Json(req): Json<WriteRequest>,
) -> ApiResult<UpdateResult> {
    Ok(Json(state.store.update_doc(&collection, &id, req.data).await?))
}

async fn remove_doc(
    State(state): State<MockState>,
    Path((collection, id)): Path<(String, String)>,
) -> ApiResult<RemoveResult> {
    Ok(Json(state.store.remove_doc(&collection, &id).await?))
}

async fn upload(
    State(state): State<MockState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> ApiResult<UploadResult> {
    if params.cloud_path.trim_matches('/').is_empty() {
        return Err(StoreError::Invalid("cloudPath is empty".to_string()).into());
    }
    let result = state.files.put(&params.cloud_path, body.to_vec());
    tracing::info!(cloud_path = %params.cloud_path, size = body.len(), "File stored");
    Ok(Json(result))
}

/// Reject requests without the configured bearer token
async fn require_token(
    State(state): State<MockState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = &state.token {
        let provided = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "));
        if provided != Some(expected.as_str()) {
            return Err(ApiError::Unauthorized);
        }
    }
    Ok(next.run(request).await)
}

/// Build the document store API
pub fn router(state: MockState) -> Router {
    Router::new()
        .route("/collections/{collection}/count", get(count))
        .route(
            "/collections/{collection}/documents",
            get(page).post(add).patch(update_where),
        )
        .route(
            "/collections/{collection}/documents/{id}",
            patch(update_doc).delete(remove_doc),
        )
        .route("/collections/{collection}/query", post(query))
        .route("/storage/upload", post(upload))
        .layer(middleware::from_fn_with_state(state.clone(), require_token))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
