use super::*;
use hd_core::ID;
use hd_core::Unique;

/// Registered identity with its current role.
///
/// This is the public projection: the password hash is a database-only
/// field and never part of the domain type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    id: ID<Self>,
    name: String,
    email: String,
    role: Role,
}

impl Member {
    pub fn new(id: ID<Self>, name: String, email: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn role(&self) -> Role {
        self.role
    }
    /// Same identity under a different role.
    pub fn with_role(self, role: Role) -> Self {
        Self { role, ..self }
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// Canonical form of an email address: one identity per normalized email.
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use hd_pg::*;

    impl Schema for Member {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          UUID PRIMARY KEY,
                    name        VARCHAR(255) NOT NULL,
                    email       VARCHAR(255) UNIQUE NOT NULL,
                    hashword    TEXT NOT NULL,
                    role        VARCHAR(16) NOT NULL DEFAULT 'submitter'
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_role ON ",
                USERS,
                " (role);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Alice@Example.COM "), "alice@example.com");
    }
    #[test]
    fn with_role_keeps_identity() {
        let member = Member::new(ID::default(), "a".into(), "a@x.io".into(), Role::Submitter);
        let promoted = member.clone().with_role(Role::Reviewer);
        assert_eq!(promoted.id(), member.id());
        assert_eq!(promoted.role(), Role::Reviewer);
    }
}
