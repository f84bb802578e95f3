//! User account domain rules.

use thiserror::Error;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Reasons an email address is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("users must have an email address")]
    Empty,
    #[error("malformed email address")]
    Invalid,
}

/// Normalize an email address: trim surrounding whitespace and lowercase the
/// domain part. The local part is kept as given.
///
/// ```
/// use gig_domain::user::normalize_email;
///
/// assert_eq!(normalize_email("test@TEST.COM").unwrap(), "test@test.com");
/// assert_eq!(normalize_email("Mixed.Case@Example.org").unwrap(), "Mixed.Case@example.org");
/// ```
pub fn normalize_email(raw: &str) -> Result<String, EmailError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EmailError::Empty);
    }
    let (local, domain) = trimmed.rsplit_once('@').ok_or(EmailError::Invalid)?;
    if local.is_empty() || domain.is_empty() || local.contains('@') {
        return Err(EmailError::Invalid);
    }
    Ok(format!("{local}@{}", domain.to_lowercase()))
}

/// Whether a plaintext password is long enough to be accepted.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_lowercase_domain_part() {
        assert_eq!(normalize_email("test@TEST.COM").unwrap(), "test@test.com");
    }

    #[test]
    fn should_keep_local_part_case() {
        assert_eq!(normalize_email("Alice@Example.COM").unwrap(), "Alice@example.com");
    }

    #[test]
    fn should_trim_whitespace() {
        assert_eq!(normalize_email("  a@b.io \n").unwrap(), "a@b.io");
    }

    #[test]
    fn should_reject_empty_email() {
        assert_eq!(normalize_email(""), Err(EmailError::Empty));
        assert_eq!(normalize_email("   "), Err(EmailError::Empty));
    }

    #[test]
    fn should_reject_malformed_email() {
        assert_eq!(normalize_email("no-at-sign"), Err(EmailError::Invalid));
        assert_eq!(normalize_email("@example.com"), Err(EmailError::Invalid));
        assert_eq!(normalize_email("user@"), Err(EmailError::Invalid));
        assert_eq!(normalize_email("a@b@c"), Err(EmailError::Invalid));
    }

    #[test]
    fn should_require_minimum_password_length() {
        assert!(!validate_password("abcd"));
        assert!(validate_password("abcde"));
        assert!(validate_password("Testpass123"));
    }
}
