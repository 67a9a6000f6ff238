use super::*;
use hd_core::ID;
use hd_core::Unique;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-process identity store.
///
/// Mirrors the postgres repository's contract, including the unique email
/// constraint, for tests and database-free runs.
#[derive(Debug, Default)]
pub struct Memory {
    members: RwLock<HashMap<ID<Member>, (Member, String)>>,
}

impl Memory {
    /// Public projection by id, without going through the async trait.
    pub fn member(&self, id: ID<Member>) -> Option<Member> {
        self.members
            .read()
            .expect("members lock")
            .get(&id)
            .map(|(member, _)| member.clone())
    }
}

impl AuthRepository for Memory {
    async fn exists(&self, email: &str) -> Result<bool, Error> {
        Ok(self
            .members
            .read()
            .expect("members lock")
            .values()
            .any(|(member, _)| member.email() == email))
    }

    async fn create(&self, member: &Member, hashword: &str) -> Result<(), Error> {
        let mut members = self.members.write().expect("members lock");
        if members.values().any(|(m, _)| m.email() == member.email()) {
            return Err(Error::email_taken());
        }
        members.insert(member.id(), (member.clone(), hashword.to_string()));
        Ok(())
    }

    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, Error> {
        Ok(self
            .members
            .read()
            .expect("members lock")
            .values()
            .find(|(member, _)| member.email() == email)
            .cloned())
    }

    async fn find(&self, id: ID<Member>) -> Result<Option<Member>, Error> {
        Ok(self.member(id))
    }

    async fn promote(&self, id: ID<Member>, role: Role) -> Result<(), Error> {
        let mut members = self.members.write().expect("members lock");
        if let Some((member, _)) = members.get_mut(&id) {
            *member = member.clone().with_role(role);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_insert_reports_taken_email() {
        let db = Memory::default();
        let first = Member::new(ID::default(), "a".into(), "a@x.io".into(), Role::Submitter);
        let second = Member::new(ID::default(), "b".into(), "a@x.io".into(), Role::Submitter);
        db.create(&first, "hash").await.unwrap();
        assert_eq!(db.create(&second, "hash").await, Err(Error::email_taken()));
        assert_eq!(db.member(second.id()), None);
    }
}
