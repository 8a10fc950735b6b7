use recipelens_config::Config;
use recipelens_llm::CompletionClient;

/// Shared, read-only server state: configuration plus the completion
/// client built from it. Constructed once at startup.
pub struct AppState {
    pub config: Config,
    pub client: CompletionClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = CompletionClient::new(&config)?;
        Ok(Self { config, client })
    }
}
