//! Field validation for the sign-in form.

use thiserror::Error;

use crate::consts::cli_consts::form;

/// A field value that failed validation, with the hint shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Check that an email value is non-empty and has a plausible address shape.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    if email.chars().count() > form::EMAIL_MAX_CHARS {
        return Err(ValidationError::EmailInvalid);
    }

    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::EmailInvalid);
    }

    // Exactly one '@' separating a local part from a domain
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ValidationError::EmailInvalid);
    }

    let (local, domain) = (parts[0], parts[1]);
    if local.is_empty() || local.chars().count() > form::EMAIL_LOCAL_MAX_CHARS {
        return Err(ValidationError::EmailInvalid);
    }

    // The domain must carry at least one dot ("a@b" is not accepted)
    if domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::EmailInvalid);
    }

    Ok(())
}

/// Check that a password value is non-empty and long enough.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    if password.chars().count() < form::PASSWORD_MIN_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}
