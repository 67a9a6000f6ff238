//! Complaint records and their status lifecycle.
//!
//! Submitters file complaints and see only their own; reviewers see every
//! complaint, filter it, and move it between statuses.
//!
//! ## Domain
//!
//! - [`Complaint`] — A filed complaint with immutable owner
//! - [`Category`], [`Priority`], [`Status`] — Closed value sets
//! - [`Listing`] — Complaint with its owner's public projection
//!
//! ## Operations
//!
//! - [`Lifecycle`] — Role-gated create, scoped list, status transitions
//! - [`Filter`] — Query narrowing, re-scoped server-side per caller
//! - [`ComplaintRepository`] — Storage contract (postgres or [`Memory`])
mod category;
mod complaint;
mod dto;
mod filter;
mod lifecycle;
mod listing;
mod memory;
mod priority;
mod repository;
mod status;

pub use category::*;
pub use complaint::*;
pub use dto::*;
pub use filter::*;
pub use lifecycle::*;
pub use listing::*;
pub use memory::*;
pub use priority::*;
pub use repository::*;
pub use status::*;

#[cfg(feature = "server")]
pub mod handlers;
