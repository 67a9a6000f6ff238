use super::*;
use hd_auth::UserInfo;
use hd_core::Unique;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateRequest {
    pub category: String,
    pub description: String,
    pub priority: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusRequest {
    pub status: String,
}

/// Query string of the listing endpoint. Values are parsed by [`Filter::parse`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub owner: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComplaintResponse {
    pub complaint: ComplaintInfo,
}

#[derive(Debug, Serialize)]
pub struct ComplaintsResponse {
    pub complaints: Vec<ComplaintInfo>,
}

/// A complaint as it crosses the wire, owner attached. Timestamps are unix
/// milliseconds.
#[derive(Debug, Serialize)]
pub struct ComplaintInfo {
    pub id: String,
    pub category: Category,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub owner: UserInfo,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&Listing> for ComplaintInfo {
    fn from(listing: &Listing) -> Self {
        let complaint = listing.complaint();
        Self {
            id: complaint.id().to_string(),
            category: complaint.category(),
            description: complaint.description().to_string(),
            priority: complaint.priority(),
            status: complaint.status(),
            owner: UserInfo::from(listing.owner()),
            created_at: hd_core::millis(complaint.created()),
            updated_at: hd_core::millis(complaint.updated()),
        }
    }
}
