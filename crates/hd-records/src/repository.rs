use super::*;
use hd_auth::Error;
use hd_core::ID;
use std::time::SystemTime;

/// Repository trait for complaint storage.
///
/// Query results carry the owner's public projection and are ordered by
/// creation time, newest first.
#[allow(async_fn_in_trait)]
pub trait ComplaintRepository {
    async fn insert(&self, complaint: &Complaint) -> Result<(), Error>;
    /// Atomically reassigns status and update time. `None` if no such id.
    async fn update_status(
        &self,
        id: ID<Complaint>,
        status: Status,
        updated: SystemTime,
    ) -> Result<Option<Listing>, Error>;
    async fn query(&self, filter: &Filter) -> Result<Vec<Listing>, Error>;
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use hd_auth::Member;
    use hd_auth::Role;
    use hd_core::Unique;
    use hd_pg::*;
    use std::sync::Arc;
    use tokio_postgres::Client;
    use tokio_postgres::Row;

    /// Columns shared by every listing query, complaint `c` joined to owner `u`.
    const LISTING: &str = "c.id, c.owner_id, c.category, c.description, c.priority, c.status, c.created_at, c.updated_at, u.name, u.email, u.role";

    fn listing(row: &Row) -> Result<Listing, Error> {
        let owner = ID::from(row.get::<_, uuid::Uuid>(1));
        let complaint = Complaint::new(
            ID::from(row.get::<_, uuid::Uuid>(0)),
            owner,
            Category::try_from(row.get::<_, &str>(2)).map_err(Error::internal)?,
            row.get::<_, String>(3),
            Priority::try_from(row.get::<_, &str>(4)).map_err(Error::internal)?,
            Status::try_from(row.get::<_, &str>(5)).map_err(Error::internal)?,
            row.get::<_, SystemTime>(6),
            row.get::<_, SystemTime>(7),
        );
        let member = Member::new(
            owner,
            row.get::<_, String>(8),
            row.get::<_, String>(9),
            Role::try_from(row.get::<_, &str>(10)).map_err(Error::internal)?,
        );
        Ok(Listing::new(complaint, member))
    }

    impl ComplaintRepository for Arc<Client> {
        async fn insert(&self, complaint: &Complaint) -> Result<(), Error> {
            self.execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    COMPLAINTS,
                    " (id, owner_id, category, description, priority, status, created_at, updated_at)
                      VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
                ),
                &[
                    &complaint.id().inner(),
                    &complaint.owner().inner(),
                    &complaint.category().label(),
                    &complaint.description(),
                    &complaint.priority().label(),
                    &complaint.status().label(),
                    &complaint.created(),
                    &complaint.updated(),
                ],
            )
            .await
            .map(|_| ())
            .map_err(Error::from)
        }

        async fn update_status(
            &self,
            id: ID<Complaint>,
            status: Status,
            updated: SystemTime,
        ) -> Result<Option<Listing>, Error> {
            self.query_opt(
                const_format::concatcp!(
                    "WITH c AS (UPDATE ",
                    COMPLAINTS,
                    " SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *)
                      SELECT ",
                    LISTING,
                    " FROM c JOIN ",
                    USERS,
                    " u ON u.id = c.owner_id"
                ),
                &[&id.inner(), &status.label(), &updated],
            )
            .await?
            .as_ref()
            .map(listing)
            .transpose()
        }

        async fn query(&self, filter: &Filter) -> Result<Vec<Listing>, Error> {
            let owner = filter.owner().map(|id| id.inner());
            let category = filter.category().map(|c| c.label());
            let status = filter.status().map(|s| s.label());
            Client::query(
                self,
                const_format::concatcp!(
                    "SELECT ",
                    LISTING,
                    " FROM ",
                    COMPLAINTS,
                    " c JOIN ",
                    USERS,
                    " u ON u.id = c.owner_id
                      WHERE ($1::uuid IS NULL OR c.owner_id = $1)
                        AND ($2::text IS NULL OR c.category = $2)
                        AND ($3::text IS NULL OR c.status   = $3)
                      ORDER BY c.created_at DESC, c.id DESC"
                ),
                &[&owner, &category, &status],
            )
            .await?
            .iter()
            .map(listing)
            .collect()
        }
    }
}
