// catalog-mock/tests/http_roundtrip.rs
// HttpStore and both accessors against a live mock server

use catalog_client::{
    CatalogAccessor, CatalogError, ClientConfig, DocumentStore, HttpStore, Item, LocalFilePicker,
    PosterAccessor, PosterKind, RemoveOutcome, RemoveResult,
};
use catalog_mock::MockState;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

/// Bind an ephemeral port, serve `state` in the background and return the base URL
async fn spawn(state: MockState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(catalog_mock::serve(listener, state));
    format!("http://{}", addr)
}

fn http_store(config: &ClientConfig) -> Arc<HttpStore> {
    Arc::new(config.build_http_store().unwrap())
}

#[tokio::test]
async fn test_get_all_pages_through_http() {
    let state = MockState::default();
    for order in 0..45 {
        state
            .store
            .seed("goods", json!({ "category": "beer", "order": order, "brand": "B" }));
    }
    state.store.seed("goods", json!({ "category": "food", "order": 0, "name": "Fries" }));
    let base_url = spawn(state).await;

    let config = ClientConfig::new(base_url);
    let accessor = CatalogAccessor::new(http_store(&config), &config);
    let items = accessor.get_all().await.unwrap();

    assert_eq!(items.len(), 46);
    assert_eq!(items[0].show_name, "NO.00 · B");
    assert_eq!(items[44].show_name, "NO.44 · B");
    assert_eq!(items[45].show_name, "Fries");
}

#[tokio::test]
async fn test_server_caps_page_size() {
    let state = MockState {
        max_page_size: 5,
        ..MockState::default()
    };
    for order in 0..8 {
        state.store.seed("goods", json!({ "category": "can", "order": order }));
    }
    let base_url = spawn(state).await;

    let store = http_store(&ClientConfig::new(base_url));
    assert_eq!(store.count("goods").await.unwrap(), 8);
    assert_eq!(store.page("goods", 0, 50).await.unwrap().len(), 5);
    assert_eq!(store.page("goods", 5, 50).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_all_rejects_short_pages() {
    let state = MockState::default();
    for order in 0..45 {
        state.store.seed("goods", json!({ "category": "food", "order": order }));
    }
    let base_url = spawn(state).await;

    let config = ClientConfig::new(base_url).with_page_size(50);
    let accessor = CatalogAccessor::new(http_store(&config), &config);
    assert_eq!(accessor.get_all().await.unwrap_err(), CatalogError::QueryFailed);
}

#[tokio::test]
async fn test_mutations_through_http() {
    let state = MockState::default();
    let base_url = spawn(state.clone()).await;
    let config = ClientConfig::new(base_url);
    let accessor = CatalogAccessor::new(http_store(&config), &config);

    let mut beer = Item::new("beer");
    beer.order = 7;
    beer.brand = Some("Hop".to_string());
    let ack = accessor.add_item(&beer).await.unwrap();
    assert_eq!(state.store.len("goods"), 1);

    let mut stored = accessor.get_detail(&ack.id).await.unwrap().item;
    assert_eq!(stored.brand.as_deref(), Some("Hop"));

    stored.name = Some("Pils".to_string());
    let result = accessor.replace_item(&stored).await.unwrap();
    assert_eq!(result.updated, 1);
    assert_eq!(
        accessor.get_detail(&ack.id).await.unwrap().show_name,
        "NO.07 · Hop · Pils"
    );

    let outcome = accessor.remove_item(&stored).await.unwrap();
    assert!(matches!(outcome, RemoveOutcome::Toggled { hide: true, .. }));
    assert_eq!(state.store.get("goods", &ack.id).unwrap()["hide"], true);

    let food = Item::new("food");
    let food_id = accessor.add_item(&food).await.unwrap().id;
    let food = accessor.get_detail(&food_id).await.unwrap().item;
    accessor.remove_item(&food).await.unwrap();
    assert!(state.store.get("goods", &food_id).is_none());
}

#[tokio::test]
async fn test_missing_document_is_query_failure() {
    let base_url = spawn(MockState::default()).await;
    let config = ClientConfig::new(base_url);
    let accessor = CatalogAccessor::new(http_store(&config), &config);

    assert_eq!(
        accessor.get_detail("nope").await.unwrap_err(),
        CatalogError::QueryFailed
    );

    let mut ghost = Item::new("can");
    ghost.id = Some("nope".to_string());
    assert_eq!(
        accessor.remove_item(&ghost).await.unwrap(),
        RemoveOutcome::Deleted(RemoveResult { removed: 0 })
    );
}

#[tokio::test]
async fn test_token_is_enforced() {
    let state = MockState::default().with_token("s3cret");
    state.store.seed("goods", json!({ "category": "food" }));
    let base_url = spawn(state).await;

    let anonymous = ClientConfig::new(base_url.clone());
    let accessor = CatalogAccessor::new(http_store(&anonymous), &anonymous);
    assert_eq!(accessor.get_all().await.unwrap_err(), CatalogError::QueryFailed);

    let authorized = ClientConfig::new(base_url).with_token("s3cret");
    let accessor = CatalogAccessor::new(http_store(&authorized), &authorized);
    assert_eq!(accessor.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_poster_upload_through_http() {
    let state = MockState::default();
    state
        .store
        .seed("posters", json!({ "_id": "movie-slot", "type": "movie", "img": "" }));
    let base_url = spawn(state.clone()).await;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("poster.png");
    std::fs::write(&path, b"\x89PNG\r\n").unwrap();

    let config = ClientConfig::new(base_url);
    let store = http_store(&config);
    let accessor = PosterAccessor::new(
        store.clone(),
        store,
        Arc::new(LocalFilePicker::new([path])),
        &config,
    );

    let url = accessor.upload_poster(PosterKind::Movie).await.unwrap();
    assert!(url.starts_with("https://7461.tcb.qcloud.la/"));
    assert_eq!(state.store.get("posters", "movie-slot").unwrap()["img"], url.as_str());

    let cloud_path = url.rsplit('/').next().unwrap();
    assert_eq!(state.files.file(cloud_path).unwrap(), b"\x89PNG\r\n");

    let movie = accessor.get_posters(Some(PosterKind::Movie)).await.unwrap().remove(0);
    assert_eq!(accessor.remove_poster(PosterKind::Movie, &movie).await.unwrap(), 1);
    assert_eq!(state.store.get("posters", "movie-slot").unwrap()["img"], "");
}
