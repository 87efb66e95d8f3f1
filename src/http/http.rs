use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::ServiceConfig;
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;
use crate::ssl::ssl::create_server_config_with_reloader;
use crate::ssl::structs::certificate_reloader::CertificateReloader;

pub fn https_service_routes() -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.service(web::resource("/").route(web::get().to(https_service_hello)));
        cfg.default_service(web::route().to(https_service_not_found));
    })
}

pub fn https_service(
    addr: SocketAddr,
    reloader: Arc<CertificateReloader>,
    config: Arc<Configuration>
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), CustomError>
{
    info!("[HTTPS] Starting server listener with SSL on {}", addr);

    let tls_config = create_server_config_with_reloader(reloader)
        .map_err(|e| CustomError::new(&e.to_string()))?;

    let server = HttpServer::new(|| {
        App::new()
            .configure(https_service_routes())
    })
        .keep_alive(Duration::from_secs(config.keep_alive.unwrap_or(60)))
        .client_request_timeout(Duration::from_secs(config.request_timeout.unwrap_or(15)))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout.unwrap_or(15)))
        .workers(config.threads.unwrap_or(1) as usize)
        .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
        .map_err(|e| CustomError::new(&format!("Unable to bind to {addr}: {e}")))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn https_service_hello() -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body("Hello World")
}

pub async fn https_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body("Not Found")
}
