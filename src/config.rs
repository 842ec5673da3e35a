use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub upload_directory: String,
    pub hosting_api_url: String,
    pub hosting_api_key: String,
    pub search_api_url: String,
    pub search_api_key: String,
    pub request_timeout_secs: u64,
    pub web_port: u16,
    pub log_level: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false))
            // API keys and the port come from SCANNER_* variables in deployment;
            // the committed files carry no credentials.
            .add_source(Environment::with_prefix("scanner"))
            .build()?;

        s.try_deserialize()
    }
}
