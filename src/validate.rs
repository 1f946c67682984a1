use std::sync::LazyLock;

use regex::Regex;

use crate::models::Submission;

/// Upper bound per field; keeps a single pathological submission from
/// bloating the store.
pub const MAX_FIELD_LEN: usize = 10_000;

// HTML5 / WHATWG email grammar, a practical RFC 5322 subset.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
    FieldTooLong(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "Missing required fields"),
            ValidationError::InvalidEmail => write!(f, "Invalid email address"),
            ValidationError::FieldTooLong(field) => write!(f, "Field too long: {field}"),
        }
    }
}

/// Trim and validate a raw submission. First failing check wins:
/// required fields non-empty after trimming, length bound, email grammar.
/// Returns the cleaned submission that the caller should use from here on;
/// a trimmed-empty phone collapses to `None`.
pub fn clean(raw: &Submission) -> Result<Submission, ValidationError> {
    let name = raw.name.trim();
    let email = raw.email.trim();
    let service = raw.service.trim();
    let message = raw.message.trim();
    let phone = raw.phone.as_deref().map(str::trim).filter(|p| !p.is_empty());

    if name.is_empty() || email.is_empty() || service.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    for (field, value) in [
        ("name", name),
        ("email", email),
        ("service", service),
        ("message", message),
    ] {
        if value.len() > MAX_FIELD_LEN {
            return Err(ValidationError::FieldTooLong(field));
        }
    }
    if phone.is_some_and(|p| p.len() > MAX_FIELD_LEN) {
        return Err(ValidationError::FieldTooLong("phone"));
    }

    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(Submission {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(|p| p.to_string()),
        service: service.to_string(),
        message: message.to_string(),
    })
}
