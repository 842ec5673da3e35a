use crate::config::AppConfig;
use crate::error::AppError;
use crate::intake;
use crate::scanner::Scanner;
use actix_cors::Cors;
use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::{web, App, HttpResponse, HttpServer};
use std::path::Path;
use std::sync::Arc;

async fn index() -> Result<NamedFile, AppError> {
    NamedFile::open_async("./static/index.html").await.map_err(|e| {
        log::error!("Error serving index.html: {}", e);
        AppError::Io(e)
    })
}

async fn guru_scan(
    mut payload: Multipart,
    scanner: web::Data<Scanner>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    log::info!("Received scan request");
    let handle = intake::receive_image(&mut payload, Path::new(&config.upload_directory)).await?;
    let response = scanner.scan(handle).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn start_web_server(config: Arc<AppConfig>, scanner: Scanner) -> std::io::Result<()> {
    let port = config.web_port;
    let config_data = web::Data::from(config);
    let scanner_data = web::Data::new(scanner);

    log::info!("Starting web server on port: {}", port);
    log::debug!("Serving static files from ./static directory.");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(config_data.clone())
            .app_data(scanner_data.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .service(web::resource("/guru-scan").route(web::post().to(guru_scan)))
            .default_service(web::to(index)) // Serve index.html for any unmatched route
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await
}
