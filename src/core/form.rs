use regex::Regex;
use thiserror::Error;

/// Required contact fields, in the order they are reported when missing.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

// Intentionally loose: local@domain.tld, nothing close to full RFC shape.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Validation outcome surfaced to the user; the `Display` strings are the
/// exact messages shown in the inline error box.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    fn get(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            _ => &self.message,
        }
    }
}

/// Check required fields first (all missing ones reported together), then
/// the email shape. Values are trimmed for the presence check only.
pub fn validate(fields: &ContactFields) -> Result<(), FormError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| fields.get(field).trim().is_empty())
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(FormError::MissingFields(missing));
    }
    if !is_valid_email(&fields.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}
