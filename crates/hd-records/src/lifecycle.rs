use super::*;
use hd_auth::Error;
use hd_auth::Guard;
use hd_auth::Principal;
use hd_auth::Role;
use hd_core::ID;
use hd_core::Unique;

/// Role-scoped operations over the complaint store.
///
/// Callers are already authenticated; every operation applies its own role
/// gate before touching the store.
pub struct Lifecycle<'a, R> {
    db: &'a R,
}

impl<'a, R> Lifecycle<'a, R>
where
    R: ComplaintRepository,
{
    pub fn new(db: &'a R) -> Self {
        Self { db }
    }

    /// Files a new complaint owned by the caller. Submitters only.
    pub async fn create(
        &self,
        principal: &Principal,
        category: &str,
        description: &str,
        priority: &str,
    ) -> Result<Complaint, Error> {
        Guard::require(principal, Role::Submitter)?;
        let description = description.trim();
        if category.is_empty() || description.is_empty() || priority.is_empty() {
            return Err(Error::validation("category, description, priority are required"));
        }
        let category = Category::try_from(category).map_err(Error::validation)?;
        let priority = Priority::try_from(priority).map_err(Error::validation)?;
        let complaint = Complaint::open(principal.id(), category, description.to_string(), priority);
        self.db.insert(&complaint).await?;
        log::info!("member {} filed complaint {}", principal.id(), complaint.id());
        Ok(complaint)
    }

    /// Complaints visible to the caller, newest first.
    ///
    /// Submitters see only their own regardless of the owner they request.
    pub async fn list(&self, principal: &Principal, filter: Filter) -> Result<Vec<Listing>, Error> {
        let scope = filter.scope(principal);
        log::debug!("member {} lists complaints with {:?}", principal.id(), scope);
        self.db.query(&scope).await
    }

    /// Reassigns a complaint's status. Reviewers only, any complaint.
    pub async fn set_status(
        &self,
        principal: &Principal,
        id: ID<Complaint>,
        status: &str,
    ) -> Result<Listing, Error> {
        Guard::require(principal, Role::Reviewer)?;
        if status.is_empty() {
            return Err(Error::validation("status is required"));
        }
        let status = Status::try_from(status).map_err(Error::validation)?;
        let listing = self
            .db
            .update_status(id, status, std::time::SystemTime::now())
            .await?
            .ok_or_else(|| Error::not_found("Complaint not found"))?;
        log::info!("reviewer {} set complaint {} to {}", principal.id(), id, status);
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_auth::AuthError;
    use hd_auth::Crypto;
    use std::time::Duration;

    async fn join(db: &Memory, name: &str) -> Principal {
        let crypto = Crypto::new(b"lifecycle", Duration::from_secs(60));
        let (token, _) = hd_auth::register(db, &crypto, name, &format!("{}@x.io", name), "pw")
            .await
            .unwrap();
        hd_auth::authenticate(db, &crypto, &token).await.unwrap()
    }
    async fn reviewer(db: &Memory) -> Principal {
        let member = hd_auth::bootstrap(db, "Admin", "admin@x.io", "pw").await.unwrap();
        Principal::new(member, Role::Reviewer)
    }

    #[tokio::test]
    async fn create_opens_complaint() {
        let db = Memory::default();
        let alice = join(&db, "alice").await;
        let complaint = Lifecycle::new(&db)
            .create(&alice, "Electricity", "  No power  ", "High")
            .await
            .unwrap();
        assert_eq!(complaint.status(), Status::Open);
        assert_eq!(complaint.owner(), alice.id());
        assert_eq!(complaint.category(), Category::Electricity);
        assert_eq!(complaint.priority(), Priority::High);
        assert_eq!(complaint.description(), "No power");
        assert_eq!(complaint.created(), complaint.updated());
    }
    #[tokio::test]
    async fn create_validates_input() {
        let db = Memory::default();
        let alice = join(&db, "alice").await;
        let engine = Lifecycle::new(&db);
        for (category, description, priority) in [
            ("Roofing", "leak", "High"),
            ("Plumbing", "leak", "Critical"),
            ("Plumbing", "   ", "High"),
            ("", "leak", "High"),
        ] {
            let result = engine.create(&alice, category, description, priority).await;
            assert!(matches!(result, Err(Error::Validation(_))));
        }
        assert!(engine.list(&alice, Filter::default()).await.unwrap().is_empty());
    }
    #[tokio::test]
    async fn reviewers_cannot_create() {
        let db = Memory::default();
        let admin = reviewer(&db).await;
        let result = Lifecycle::new(&db)
            .create(&admin, "Internet", "slow", "Low")
            .await;
        assert_eq!(result, Err(Error::Auth(AuthError::Forbidden)));
    }
    #[tokio::test]
    async fn submitters_see_only_their_own() {
        let db = Memory::default();
        let alice = join(&db, "alice").await;
        let bob = join(&db, "bob").await;
        let engine = Lifecycle::new(&db);
        engine.create(&alice, "Plumbing", "drip", "Low").await.unwrap();
        engine.create(&bob, "Internet", "down", "High").await.unwrap();
        let snoop = Filter::new(Some(alice.id()), None, None);
        let seen = engine.list(&bob, snoop).await.unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen.iter().all(|l| l.complaint().owner() == bob.id()));
    }
    #[tokio::test]
    async fn reviewers_see_all_newest_first() {
        let db = Memory::default();
        let alice = join(&db, "alice").await;
        let bob = join(&db, "bob").await;
        let admin = reviewer(&db).await;
        let engine = Lifecycle::new(&db);
        let first = engine.create(&alice, "Plumbing", "drip", "Low").await.unwrap();
        let second = engine.create(&bob, "Internet", "down", "High").await.unwrap();
        let all = engine.list(&admin, Filter::default()).await.unwrap();
        let ids = all.iter().map(|l| l.complaint().id()).collect::<Vec<_>>();
        assert_eq!(ids, vec![second.id(), first.id()]);
        assert_eq!(all[1].owner().email(), "alice@x.io");
    }
    #[tokio::test]
    async fn reviewers_filter_by_category_and_status() {
        let db = Memory::default();
        let alice = join(&db, "alice").await;
        let admin = reviewer(&db).await;
        let engine = Lifecycle::new(&db);
        let drip = engine.create(&alice, "Plumbing", "drip", "Low").await.unwrap();
        engine.create(&alice, "Internet", "down", "High").await.unwrap();
        let plumbing = Filter::new(None, Some(Category::Plumbing), None);
        let found = engine.list(&admin, plumbing).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].complaint().id(), drip.id());
        engine.set_status(&admin, drip.id(), "Resolved").await.unwrap();
        let resolved = Filter::new(None, None, Some(Status::Resolved));
        let found = engine.list(&admin, resolved).await.unwrap();
        assert_eq!(found.len(), 1);
        let open = Filter::new(None, Some(Category::Plumbing), Some(Status::Open));
        assert!(engine.list(&admin, open).await.unwrap().is_empty());
    }
    #[tokio::test]
    async fn set_status_requires_reviewer() {
        let db = Memory::default();
        let alice = join(&db, "alice").await;
        let engine = Lifecycle::new(&db);
        let complaint = engine.create(&alice, "Security", "lock", "Medium").await.unwrap();
        let result = engine.set_status(&alice, complaint.id(), "Resolved").await;
        assert_eq!(result, Err(Error::Auth(AuthError::Forbidden)));
    }
    #[tokio::test]
    async fn set_status_rejects_unknown_status() {
        let db = Memory::default();
        let alice = join(&db, "alice").await;
        let admin = reviewer(&db).await;
        let engine = Lifecycle::new(&db);
        let complaint = engine.create(&alice, "Security", "lock", "Medium").await.unwrap();
        for status in ["Closed", ""] {
            let result = engine.set_status(&admin, complaint.id(), status).await;
            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }
    #[tokio::test]
    async fn set_status_unknown_id() {
        let db = Memory::default();
        let admin = reviewer(&db).await;
        let result = Lifecycle::new(&db)
            .set_status(&admin, ID::default(), "Resolved")
            .await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
    #[tokio::test]
    async fn set_status_any_to_any() {
        let db = Memory::default();
        let alice = join(&db, "alice").await;
        let admin = reviewer(&db).await;
        let engine = Lifecycle::new(&db);
        let complaint = engine.create(&alice, "Other", "odd", "Low").await.unwrap();
        for status in ["Resolved", "Open", "InProgress", "Submitted", "Resolved"] {
            let listing = engine.set_status(&admin, complaint.id(), status).await.unwrap();
            assert_eq!(listing.complaint().status(), Status::try_from(status).unwrap());
        }
    }
    #[tokio::test]
    async fn submitter_reviewer_scenario() {
        let db = Memory::default();
        let alice = join(&db, "alice").await;
        let bob = join(&db, "bob").await;
        let admin = reviewer(&db).await;
        let engine = Lifecycle::new(&db);
        let filed = engine
            .create(&alice, "Electricity", "No power", "High")
            .await
            .unwrap();
        assert_eq!(filed.status(), Status::Open);
        assert_eq!(filed.owner(), alice.id());
        let all = engine.list(&admin, Filter::default()).await.unwrap();
        let seen = all.iter().find(|l| l.complaint().id() == filed.id()).unwrap();
        assert_eq!(seen.owner(), alice.member());
        std::thread::sleep(Duration::from_millis(2));
        let resolved = engine.set_status(&admin, filed.id(), "Resolved").await.unwrap();
        assert_eq!(resolved.complaint().status(), Status::Resolved);
        assert!(resolved.complaint().updated() > filed.updated());
        assert_eq!(resolved.owner().id(), alice.id());
        let theirs = engine.list(&bob, Filter::default()).await.unwrap();
        assert!(theirs.iter().all(|l| l.complaint().id() != filed.id()));
        assert!(theirs.is_empty());
    }
}
