use super::*;
use hd_core::ID;

/// Repository trait for identity and credential storage.
/// Abstracts SQL from domain modules. Emails are expected normalized.
#[allow(async_fn_in_trait)]
pub trait AuthRepository {
    async fn exists(&self, email: &str) -> Result<bool, Error>;
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), Error>;
    /// Member and stored hash by email; the only path that sees the hash.
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, Error>;
    /// Public projection by id.
    async fn find(&self, id: ID<Member>) -> Result<Option<Member>, Error>;
    async fn promote(&self, id: ID<Member>, role: Role) -> Result<(), Error>;
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use hd_core::Unique;
    use hd_pg::*;
    use std::sync::Arc;
    use tokio_postgres::Client;
    use tokio_postgres::Row;

    fn member(row: &Row) -> Result<Member, Error> {
        let role = Role::try_from(row.get::<_, &str>(3)).map_err(Error::internal)?;
        Ok(Member::new(
            ID::from(row.get::<_, uuid::Uuid>(0)),
            row.get::<_, String>(1),
            row.get::<_, String>(2),
            role,
        ))
    }

    impl AuthRepository for Arc<Client> {
        async fn exists(&self, email: &str) -> Result<bool, Error> {
            self.query_opt(
                const_format::concatcp!("SELECT 1 FROM ", USERS, " WHERE email = $1"),
                &[&email],
            )
            .await
            .map(|opt| opt.is_some())
            .map_err(Error::from)
        }

        async fn create(&self, member: &Member, hashword: &str) -> Result<(), Error> {
            self.execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    USERS,
                    " (id, name, email, hashword, role) VALUES ($1, $2, $3, $4, $5)"
                ),
                &[
                    &member.id().inner(),
                    &member.name(),
                    &member.email(),
                    &hashword,
                    &member.role().label(),
                ],
            )
            .await
            .map(|_| ())
            .map_err(Error::from)
        }

        async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, Error> {
            self.query_opt(
                const_format::concatcp!(
                    "SELECT id, name, email, role, hashword FROM ",
                    USERS,
                    " WHERE email = $1"
                ),
                &[&email],
            )
            .await?
            .map(|row| -> Result<_, Error> { Ok((member(&row)?, row.get::<_, String>(4))) })
            .transpose()
        }

        async fn find(&self, id: ID<Member>) -> Result<Option<Member>, Error> {
            self.query_opt(
                const_format::concatcp!(
                    "SELECT id, name, email, role FROM ",
                    USERS,
                    " WHERE id = $1"
                ),
                &[&id.inner()],
            )
            .await?
            .as_ref()
            .map(member)
            .transpose()
        }

        async fn promote(&self, id: ID<Member>, role: Role) -> Result<(), Error> {
            self.execute(
                const_format::concatcp!("UPDATE ", USERS, " SET role = $2 WHERE id = $1"),
                &[&id.inner(), &role.label()],
            )
            .await
            .map(|_| ())
            .map_err(Error::from)
        }
    }
}
