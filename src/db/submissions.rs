use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{Submission, SubmissionRecord};

/// Insert one accepted submission. A single-row insert is atomic in SQLite,
/// so this is the only serialization point the ingestion path needs.
pub async fn insert(
    pool: &SqlitePool,
    submission: &Submission,
    submitted_at: DateTime<Utc>,
) -> Result<SubmissionRecord, sqlx::Error> {
    sqlx::query_as::<_, SubmissionRecord>(
        "INSERT INTO submissions (name, email, phone, service, message, submitted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING *",
    )
    .bind(&submission.name)
    .bind(&submission.email)
    .bind(&submission.phone)
    .bind(&submission.service)
    .bind(&submission.message)
    .bind(submitted_at)
    .fetch_one(pool)
    .await
}

/// All records, newest first, the ordering the administrative listing expects.
pub async fn list_newest_first(pool: &SqlitePool) -> Result<Vec<SubmissionRecord>, sqlx::Error> {
    sqlx::query_as::<_, SubmissionRecord>("SELECT * FROM submissions ORDER BY id DESC")
        .fetch_all(pool)
        .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM submissions")
        .fetch_one(pool)
        .await
}

/// Delete one record by id. Returns the number of rows removed (0 or 1).
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM submissions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
