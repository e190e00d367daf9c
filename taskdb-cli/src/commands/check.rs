//! Connectivity check command

use anyhow::{Context, Result};
use clap::Parser;

use taskdb_server::{DbConfig, TaskPool};

use crate::config::DbArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Acquire and release one connection; fails if the database is unreachable.
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let db = DbConfig::from(args.db);
    let pool = TaskPool::connect_lazy(&db);

    let result = pool.verify().await.with_context(|| {
        format!(
            "Cannot reach {}@{}:{}/{}",
            db.user, db.host, db.port, db.database
        )
    });
    pool.close().await;
    result?;

    println!("ok: connected to {}:{}/{}", db.host, db.port, db.database);
    Ok(())
}
