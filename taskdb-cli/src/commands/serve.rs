//! HTTP server command
//!
//! Builds the task store, starts the database check in the background,
//! then serves until shutdown. The listener never waits on the check.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::task::JoinHandle;

use taskdb_server::{
    run_server, AppState, DbConfig, MemoryTaskStore, MySqlTaskStore, ServerConfig, TaskPool,
    TaskStore,
};

use crate::config::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(
        long,
        short = 'b',
        env = "TASKDB_BIND",
        default_value = "127.0.0.1:4000"
    )]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep tasks in process memory instead of MySQL
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn TaskStore> = if args.memory {
        tracing::warn!("Using in-memory store; tasks are lost on shutdown");
        Arc::new(MemoryTaskStore::new())
    } else {
        let db = DbConfig::from(args.db);
        tracing::info!(
            host = %db.host,
            port = db.port,
            database = %db.database,
            "Configuring database pool"
        );

        let pool = TaskPool::connect_lazy(&db);
        spawn_connection_check(pool.clone());
        Arc::new(MySqlTaskStore::new(pool))
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(AppState::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}

/// Check connectivity once without holding up startup.
///
/// The outcome is only logged; a failure never stops the server.
pub fn spawn_connection_check(pool: TaskPool) -> JoinHandle<()> {
    tokio::spawn(async move {
        if pool.verify().await.is_err() {
            tracing::warn!("Serving without a verified database connection");
        }
    })
}
