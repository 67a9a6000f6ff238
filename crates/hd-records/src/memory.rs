use super::*;
use hd_auth::AuthRepository;
use hd_auth::Error;
use hd_auth::Member;
use hd_auth::Role;
use hd_core::ID;
use hd_core::Unique;
use std::sync::RwLock;
use std::time::SystemTime;

/// In-process store for members and complaints.
///
/// Each operation runs under a single lock acquisition, so a status update
/// is atomic per complaint and concurrent updates are last-write-wins.
#[derive(Debug, Default)]
pub struct Memory {
    members: hd_auth::Memory,
    complaints: RwLock<Vec<Complaint>>,
}

impl Memory {
    fn listing(&self, complaint: &Complaint) -> Result<Listing, Error> {
        self.members
            .member(complaint.owner())
            .map(|owner| Listing::new(complaint.clone(), owner))
            .ok_or_else(|| Error::internal(format!("complaint {} has no owner", complaint.id())))
    }
}

impl AuthRepository for Memory {
    async fn exists(&self, email: &str) -> Result<bool, Error> {
        self.members.exists(email).await
    }
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), Error> {
        self.members.create(member, hashword).await
    }
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, Error> {
        self.members.lookup(email).await
    }
    async fn find(&self, id: ID<Member>) -> Result<Option<Member>, Error> {
        self.members.find(id).await
    }
    async fn promote(&self, id: ID<Member>, role: Role) -> Result<(), Error> {
        self.members.promote(id, role).await
    }
}

impl ComplaintRepository for Memory {
    async fn insert(&self, complaint: &Complaint) -> Result<(), Error> {
        if self.members.member(complaint.owner()).is_none() {
            return Err(Error::internal("complaint owner does not exist"));
        }
        self.complaints
            .write()
            .expect("complaints lock")
            .push(complaint.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        id: ID<Complaint>,
        status: Status,
        updated: SystemTime,
    ) -> Result<Option<Listing>, Error> {
        let mut complaints = self.complaints.write().expect("complaints lock");
        match complaints.iter_mut().find(|c| c.id() == id) {
            None => Ok(None),
            Some(complaint) => {
                complaint.transition(status, updated);
                self.listing(complaint).map(Some)
            }
        }
    }

    async fn query(&self, filter: &Filter) -> Result<Vec<Listing>, Error> {
        let mut matched = self
            .complaints
            .read()
            .expect("complaints lock")
            .iter()
            .filter(|c| filter.admits(c))
            .cloned()
            .collect::<Vec<_>>();
        matched.sort_by(|a, b| {
            b.created()
                .cmp(&a.created())
                .then_with(|| b.id().cmp(&a.id()))
        });
        matched.iter().map(|c| self.listing(c)).collect()
    }
}
