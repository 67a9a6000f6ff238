/// Schema metadata for PostgreSQL tables.
///
/// Provides compile-time SQL generation for table creation and indexing.
/// All methods return `&'static str` to avoid runtime allocations and
/// enable compile-time string construction via `const_format::concatcp!`.
///
/// # Design
///
/// This trait contains no I/O operations; it purely describes table
/// structure. Tables are brought into existence by [`migrate`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Idempotently creates the table and indices described by `T`.
///
/// Safe to run on every startup: every statement is guarded by
/// `IF NOT EXISTS`.
pub async fn migrate<T>(client: &tokio_postgres::Client) -> Result<(), tokio_postgres::Error>
where
    T: Schema,
{
    log::info!("{:<32}{:<32}", "migrating table", T::name());
    client.batch_execute(T::creates()).await?;
    client.batch_execute(T::indices()).await?;
    Ok(())
}
