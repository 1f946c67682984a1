use chrono::Utc;
use serde_json::Value;

use crate::db;
use crate::error::AppError;
use crate::models::{Submission, SubmissionRecord};
use crate::state::SharedState;
use crate::validate;

/// Validate, persist, then notify for one submission. This is the single
/// server-side synchronization point; the row insert relies on the store's
/// atomic single-row insert and nothing else is shared between requests.
///
/// The insert and the notification are deliberately not coupled: a failed
/// notification is logged and the call still succeeds. Durability of the
/// record takes precedence over delivery of the notice.
pub async fn run(state: &SharedState, raw: Value) -> Result<SubmissionRecord, AppError> {
    let phone = text_field(&raw, "phone");
    let raw_submission = Submission {
        name: text_field(&raw, "name"),
        email: text_field(&raw, "email"),
        phone: if phone.is_empty() { None } else { Some(phone) },
        service: text_field(&raw, "service"),
        message: text_field(&raw, "message"),
    };

    let submission = validate::clean(&raw_submission)?;

    let record = db::submissions::insert(&state.pool, &submission, Utc::now()).await?;

    match &state.notifier {
        Some(notifier) => match notifier.notify(&record).await {
            Ok(()) => tracing::info!("Notification sent for submission {}", record.id),
            Err(e) => tracing::warn!("Notification failed for submission {}: {e}", record.id),
        },
        None => tracing::debug!("No notifier configured, skipping submission {}", record.id),
    }

    Ok(record)
}

/// A missing or non-string field extracts as the empty string, which the
/// required-field check then rejects. Bare numbers are tolerated as text.
fn text_field(payload: &Value, key: &str) -> String {
    match payload.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
