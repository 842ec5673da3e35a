mod api_clients;
mod config;
mod error;
mod hosting;
mod intake;
mod results;
mod scanner;
mod search;
mod web_server;

use crate::api_clients::{imgbb::ImgbbHost, serpapi::SerpApiSearcher};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::hosting::ImageHost;
use crate::scanner::Scanner;
use crate::search::MatchSearcher;
use anyhow::Result;
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::new().map_err(AppError::Config)?;

    // Initialize env_logger based on config.log_level
    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    info!("Starting image-scanner");

    // Uploads directory lives for the whole process; individual files are
    // removed per request.
    let upload_dir = std::path::Path::new(&config.upload_directory);
    if !upload_dir.exists() {
        std::fs::create_dir_all(upload_dir)?;
        log::debug!("Created uploads directory: {:?}", upload_dir);
    }

    let host: Arc<dyn ImageHost> = Arc::new(ImgbbHost::new(&config)?);
    let searcher: Arc<dyn MatchSearcher> = Arc::new(SerpApiSearcher::new(&config)?);
    let scanner = Scanner::new(host, searcher);

    // Run the web server in the foreground
    if let Err(e) = web_server::start_web_server(Arc::new(config), scanner).await {
        log::error!("Web server error: {}", e);
    }

    info!("Image-scanner finished");

    Ok(())
}
