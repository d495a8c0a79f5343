//! PostgreSQL schema migrations for outliner storage.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations. Every statement is idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS outlines (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id TEXT NOT NULL,
            title TEXT NOT NULL DEFAULT '',
            content JSONB NOT NULL DEFAULT '{"thesis": "", "points": []}',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_outlines_user_created ON outlines (user_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    // Owner-only access. Applies to non-owner roles; queries also filter on
    // user_id so the table owner gets the same scoping.
    sqlx::query("ALTER TABLE outlines ENABLE ROW LEVEL SECURITY").execute(pool).await?;

    sqlx::query(
        r#"
        DO $$ BEGIN
            IF NOT EXISTS (
                SELECT 1 FROM pg_policies
                WHERE tablename = 'outlines' AND policyname = 'outlines_owner'
            ) THEN
                CREATE POLICY outlines_owner ON outlines
                    USING (user_id = current_setting('app.user_id', true))
                    WITH CHECK (user_id = current_setting('app.user_id', true));
            END IF;
        END $$
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("outline migrations applied");
    Ok(())
}
