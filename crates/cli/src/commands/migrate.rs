//! Apply the outlines schema to the Postgres database at `DATABASE_URL`.
//!
//! Idempotent: every statement is `IF NOT EXISTS` or guarded.

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

pub(crate) async fn run() -> anyhow::Result<()> {
    let url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set for migration")?;
    let pool = PgPoolOptions::new().max_connections(1).connect(&url).await?;
    outliner_storage::run_pg_migrations(&pool).await?;
    pool.close().await;
    println!("outlines schema is up to date");
    Ok(())
}
