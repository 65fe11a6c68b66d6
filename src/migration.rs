//! Create the teacher, subject and student tables. Order follows foreign key dependencies.

use crate::error::AppError;
use sqlx::PgPool;

/// Parent tables first. Child foreign keys cascade on delete, so removing a teacher removes
/// its subjects and, through them, their students.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS "teacher" (
        "id" BIGSERIAL PRIMARY KEY,
        "nombre" VARCHAR(255)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS "subject" (
        "id" BIGSERIAL PRIMARY KEY,
        "nombre" VARCHAR(255),
        "teacher_id" BIGINT REFERENCES "teacher" ("id") ON DELETE CASCADE
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS "subject_teacher_id_idx" ON "subject" ("teacher_id")"#,
    r#"
    CREATE TABLE IF NOT EXISTS "student" (
        "id" BIGSERIAL PRIMARY KEY,
        "nombre" VARCHAR(255),
        "apellido" VARCHAR(255),
        "identificacion" VARCHAR(255),
        "subject_id" BIGINT REFERENCES "subject" ("id") ON DELETE CASCADE
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS "student_subject_id_idx" ON "student" ("subject_id")"#,
];

/// Idempotent: every statement is IF NOT EXISTS.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(statements = SCHEMA.len(), "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn migrations_are_idempotent(pool: PgPool) {
        apply_migrations(&pool).await.unwrap();
        apply_migrations(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT table_name::text FROM information_schema.tables \
             WHERE table_schema = current_schema() ORDER BY table_name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, vec!["student", "subject", "teacher"]);
    }
}
