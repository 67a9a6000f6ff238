//! Helpdesk: stateless token authentication, role-based authorization,
//! and a complaint lifecycle split between submitters and reviewers.
//!
//! Facade over the workspace crates:
//!
//! - [`core`] — typed identifiers, constants, logging
//! - [`auth`] — credentials, tokens, identity resolution, role guard
//! - [`records`] — complaints, filters, and the lifecycle engine
//! - `pg` — Postgres connectivity and migrations (feature `database`)
//! - `server` — actix-web composition root (feature `server`)
pub use hd_auth as auth;
pub use hd_core as core;
pub use hd_records as records;

#[cfg(feature = "database")]
pub use hd_pg as pg;
#[cfg(feature = "server")]
pub use hd_server as server;
