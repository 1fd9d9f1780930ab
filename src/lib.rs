use actix_web::{http, web, App, HttpRequest, HttpServer, ResponseError};
use actix_web::dev::Server;
use actix_web::error::{InternalError, JsonPayloadError};
use tracing_actix_web::TracingLogger;
use sqlx::PgPool;
use std::net::TcpListener;
use actix_cors::Cors;

pub mod config;
mod routes;
mod handlers;
pub mod models;
mod middleware;
pub mod db;
pub mod services;
pub mod telemetry;

pub use crate::middleware::session::SessionClaims;

use crate::routes::init_routes;
use crate::config::session::SessionSettings;
use crate::models::error::AppError;
use crate::services::OddsClient;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    odds_client: OddsClient,
    session_settings: SessionSettings,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let odds_client_data = web::Data::new(odds_client);
    let session_settings = web::Data::new(session_settings);

    let server = HttpServer::new( move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        let app = App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(odds_client_data.clone())
            .app_data(session_settings.clone())
            // Bodies are parsed as JSON whatever their declared content type
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(json_error_handler)
            );

        app.configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Malformed or non-JSON request bodies get the same error body as any other validation failure.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected request body: {}", err);
    let response = AppError::Validation(format!("Invalid request body: {}", err)).error_response();
    InternalError::from_response(err, response).into()
}
