use super::*;
use hd_auth::Member;

/// A complaint together with its owner's public projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    complaint: Complaint,
    owner: Member,
}

impl Listing {
    pub fn new(complaint: Complaint, owner: Member) -> Self {
        Self { complaint, owner }
    }
    pub fn complaint(&self) -> &Complaint {
        &self.complaint
    }
    pub fn owner(&self) -> &Member {
        &self.owner
    }
}
