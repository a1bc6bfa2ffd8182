//! Email normalization and format checks.
//!
//! Emails are the login key, so every path that stores or looks one up
//! goes through [`normalize_email`] first.

/// Trim surrounding whitespace and lower-case.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Structural email check: `local@domain.tld`, no whitespace, one `@`,
/// and no empty domain labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
