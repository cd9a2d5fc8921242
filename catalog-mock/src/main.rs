use catalog_client::MemoryFileStorage;
use catalog_mock::{MockConfig, MockState, logger};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = MockConfig::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    let state = MockState {
        files: MemoryFileStorage::new(config.file_env.clone()),
        token: config.token.clone(),
        max_page_size: config.max_page_size,
        ..MockState::default()
    };

    if let Some(path) = &config.seed_file {
        let raw = tokio::fs::read_to_string(path).await?;
        let inserted = state.seed(serde_json::from_str(&raw)?)?;
        tracing::info!(path = %path, inserted, "Seed data loaded");
    }

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("catalog-mock listening on {addr}");

    if let Err(e) = catalog_mock::serve(listener, state).await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }
    Ok(())
}
