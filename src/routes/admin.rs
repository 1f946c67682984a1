use axum::Json;
use axum::extract::{Path, State};
use serde_json::json;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, AppError> {
    let submissions = db::submissions::list_newest_first(&state.pool).await?;
    let total = submissions.len();

    Ok(Json(json!({
        "submissions": submissions,
        "total": total,
    })))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = db::submissions::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Submission not found".to_string()));
    }

    tracing::info!("Submission {id} deleted");
    Ok(Json(json!({ "status": "ok" })))
}
