//! HTTP composition root.
//!
//! Wires the auth pipeline and the complaint lifecycle into one actix-web
//! application over Postgres. Routes are generic over the store so the
//! same table can be served from memory in tests.
//!
//! ## Routes
//!
//! - `GET  /api/health`
//! - `POST /api/auth/register`, `POST /api/auth/login`, `GET /api/auth/me`
//! - `POST /api/complaints`, `GET /api/complaints`
//! - `PATCH /api/complaints/{id}/status`
mod config;

pub use config::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::middleware::Logger;
use actix_web::web;
use hd_auth::AuthRepository;
use hd_auth::Error;
use hd_auth::Member;
use hd_records::Complaint;
use hd_records::ComplaintRepository;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// Fallback for unmatched paths.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "message": "Not Found" }))
}

/// Malformed JSON bodies answer in the same shape as every other error.
fn json() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(hd_core::JSON_LIMIT)
        .error_handler(|e, _| Error::validation(e.to_string()).into())
}

/// Unparsable query strings too.
fn query() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|e, _| Error::validation(e.to_string()).into())
}

fn cors(origins: &Origins) -> Cors {
    let cors = Cors::default().allow_any_method().allow_any_header();
    match origins {
        Origins::Any => cors.allow_any_origin(),
        Origins::List(list) => list.iter().fold(cors, |cors, o| cors.allowed_origin(o)),
        Origins::Same => cors,
    }
}

/// Security headers stamped on every response.
fn headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .add((header::REFERRER_POLICY, "no-referrer"))
        .add((header::X_XSS_PROTECTION, "0"))
}

/// Registers every route against store `R`.
///
/// Expects `web::Data<R>` and `web::Data<hd_auth::Crypto>` on the app.
#[rustfmt::skip]
pub fn routes<R>(cfg: &mut web::ServiceConfig)
where
    R: AuthRepository + ComplaintRepository + 'static,
{
    cfg.app_data(json())
        .app_data(query())
        .route("/api/health", web::get().to(health))
        .service(
            web::scope("/api/auth")
                .route("/register", web::post().to(hd_auth::handlers::register::<R>))
                .route("/login",    web::post().to(hd_auth::handlers::login::<R>))
                .route("/me",       web::get().to(hd_auth::handlers::me::<R>)),
        )
        .service(
            web::scope("/api/complaints")
                .route("",              web::post().to(hd_records::handlers::create::<R>))
                .route("",              web::get().to(hd_records::handlers::list::<R>))
                .route("/{id}/status",  web::patch().to(hd_records::handlers::set_status::<R>)),
        );
}

/// Ensures both tables exist, then the configured reviewer account.
async fn prepare(client: &Arc<Client>, reviewer: Option<&Reviewer>) -> Result<(), Error> {
    hd_pg::migrate::<Member>(client).await?;
    hd_pg::migrate::<Complaint>(client).await?;
    if let Some(reviewer) = reviewer {
        hd_auth::bootstrap(client, &reviewer.name, &reviewer.email, &reviewer.password).await?;
    }
    Ok(())
}

pub async fn run(config: Config) -> Result<(), std::io::Error> {
    let client = hd_pg::db(&config.database)
        .await
        .map_err(std::io::Error::other)?;
    prepare(&client, config.reviewer.as_ref())
        .await
        .map_err(std::io::Error::other)?;
    let crypto = web::Data::new(config.crypto);
    let client = web::Data::new(client);
    let origins = config.origins;
    log::info!("starting helpdesk server on {}", config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(headers())
            .wrap(cors(&origins))
            .wrap(Logger::new("%r %s %Ts"))
            .app_data(crypto.clone())
            .app_data(client.clone())
            .configure(routes::<Arc<Client>>)
            .default_service(web::to(not_found))
    })
    .workers(hd_core::SERVER_WORKERS)
    .shutdown_timeout(hd_core::SHUTDOWN_TIMEOUT)
    .bind(&config.bind)?
    .run()
    .await
}
