use super::*;
use hd_auth::Member;
use hd_core::ID;
use hd_core::Unique;
use std::time::SystemTime;

/// A maintenance complaint filed by a submitter.
///
/// The owner is fixed at creation. Only `status` and `updated` ever change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    id: ID<Self>,
    owner: ID<Member>,
    category: Category,
    description: String,
    priority: Priority,
    status: Status,
    created: SystemTime,
    updated: SystemTime,
}

impl Complaint {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ID<Self>,
        owner: ID<Member>,
        category: Category,
        description: String,
        priority: Priority,
        status: Status,
        created: SystemTime,
        updated: SystemTime,
    ) -> Self {
        Self {
            id,
            owner,
            category,
            description,
            priority,
            status,
            created,
            updated,
        }
    }
    /// A freshly filed complaint: status Open, both timestamps now.
    pub fn open(owner: ID<Member>, category: Category, description: String, priority: Priority) -> Self {
        let now = SystemTime::now();
        Self::new(
            ID::default(),
            owner,
            category,
            description,
            priority,
            Status::Open,
            now,
            now,
        )
    }
    pub fn owner(&self) -> ID<Member> {
        self.owner
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn priority(&self) -> Priority {
        self.priority
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn created(&self) -> SystemTime {
        self.created
    }
    pub fn updated(&self) -> SystemTime {
        self.updated
    }
    /// Reassigns status and stamps the update time.
    pub fn transition(&mut self, status: Status, updated: SystemTime) {
        self.status = status;
        self.updated = updated;
    }
}

impl Unique for Complaint {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use hd_pg::*;

    impl Schema for Complaint {
        fn name() -> &'static str {
            COMPLAINTS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                COMPLAINTS,
                " (
                    id          UUID PRIMARY KEY,
                    owner_id    UUID NOT NULL REFERENCES ",
                USERS,
                "(id),
                    category    VARCHAR(32) NOT NULL,
                    description TEXT NOT NULL,
                    priority    VARCHAR(16) NOT NULL,
                    status      VARCHAR(16) NOT NULL DEFAULT 'Open',
                    created_at  TIMESTAMPTZ NOT NULL,
                    updated_at  TIMESTAMPTZ NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_complaints_owner ON ",
                COMPLAINTS,
                " (owner_id);
                 CREATE INDEX IF NOT EXISTS idx_complaints_status ON ",
                COMPLAINTS,
                " (status);
                 CREATE INDEX IF NOT EXISTS idx_complaints_created ON ",
                COMPLAINTS,
                " (created_at DESC);"
            )
        }
    }
}
