//! PostgreSQL integration for helpdesk.
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from a URL
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`migrate`] — Idempotent table + index creation
//!
//! ## Table Names
//!
//! Constants for all persistent entities: members and complaints.
mod schema;

pub use schema::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Returns an `Arc<Client>` suitable for sharing across async tasks. The
/// connection driver is spawned onto the current runtime and logs if the
/// connection is lost.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// SQLSTATE raised when a UNIQUE constraint rejects a row.
pub fn is_unique_violation(err: &PgErr) -> bool {
    err.code() == Some(&tokio_postgres::error::SqlState::UNIQUE_VIOLATION)
}

/// Table for registered member accounts.
#[rustfmt::skip]
pub const USERS:      &str = "users";
/// Table for submitted maintenance complaints.
#[rustfmt::skip]
pub const COMPLAINTS: &str = "complaints";
