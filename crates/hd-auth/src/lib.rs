//! Authentication, identity resolution, and role-based authorization.
//!
//! JWT-based stateless authentication with Argon2 password hashing. Every
//! protected call flows through the same pipeline:
//!
//! token → [`Crypto::verify`] → [`Resolver::resolve`] → [`Guard`] → domain
//!
//! ## Identity Types
//!
//! - [`Member`] — Registered identity with its role (hash stripped)
//! - [`Role`] — Closed capability class: submitter or reviewer
//! - [`Principal`] — Resolved member plus the role snapshot of its token
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and verification
//! - [`Claims`] — JWT payload structure
//! - [`password`] — Argon2 hashing and verification
//! - [`Guard`] — Exact-match role checks
//!
//! ## Entry Points
//!
//! - [`register`], [`login`], [`authenticate`], [`bootstrap`]
mod account;
mod claims;
mod crypto;
mod dto;
mod error;
mod guard;
mod member;
mod memory;
pub mod password;
mod repository;
mod resolver;
mod role;

pub use account::*;
pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;
pub use guard::*;
pub use member::*;
pub use memory::*;
pub use repository::*;
pub use resolver::*;
pub use role::*;

#[cfg(feature = "server")]
pub mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use middleware::*;
