/// Mock store configuration
///
/// | variable | default |
/// |----------|---------|
/// | MOCK_HTTP_PORT | 3100 |
/// | MOCK_TOKEN | (none) |
/// | MOCK_MAX_PAGE_SIZE | 20 |
/// | MOCK_FILE_ENV | taproom-dev.7461 |
/// | MOCK_SEED_FILE | (none) |
/// | LOG_LEVEL | info |
/// | LOG_DIR | (none, stdout) |
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub http_port: u16,
    pub token: Option<String>,
    pub max_page_size: u64,
    pub file_env: String,
    pub seed_file: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl MockConfig {
    /// Load from the environment (and `.env` if present)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            http_port: std::env::var("MOCK_HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3100),
            token: non_empty("MOCK_TOKEN"),
            max_page_size: std::env::var("MOCK_MAX_PAGE_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|&n: &u64| n > 0)
                .unwrap_or(catalog_client::config::DEFAULT_PAGE_SIZE),
            file_env: non_empty("MOCK_FILE_ENV").unwrap_or_else(|| "taproom-dev.7461".into()),
            seed_file: non_empty("MOCK_SEED_FILE"),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: non_empty("LOG_DIR"),
        }
    }
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
