//! Helpdesk Backend Binary
//!
//! Reads configuration from the environment, migrates the database,
//! ensures the reviewer account, and serves on BIND_ADDR.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hd_core::log();
    let config = hd_server::Config::from_env()
        .inspect_err(|e| log::error!("refusing to start: {}", e))?;
    hd_server::run(config)
        .await
        .inspect_err(|e| log::error!("server stopped: {}", e))?;
    Ok(())
}
