//! The sign-in form model: field values and their validity state.

use serde::Serialize;

use crate::validation::{ValidationError, validate_email, validate_password};

/// The snapshot of field values a valid submit hands to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Field values plus per-field validation state, recomputed on every change.
#[derive(Debug, Clone)]
pub struct LoginForm {
    email: String,
    password: String,
    email_error: Option<ValidationError>,
    password_error: Option<ValidationError>,
}

impl LoginForm {
    /// An empty form. Both fields start invalid (they are required).
    pub fn new() -> Self {
        let mut form = Self {
            email: String::new(),
            password: String::new(),
            email_error: None,
            password_error: None,
        };
        form.revalidate();
        form
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.revalidate();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.revalidate();
    }

    pub fn email_error(&self) -> Option<ValidationError> {
        self.email_error
    }

    pub fn password_error(&self) -> Option<ValidationError> {
        self.password_error
    }

    pub fn email_valid(&self) -> bool {
        self.email_error.is_none()
    }

    pub fn password_valid(&self) -> bool {
        self.password_error.is_none()
    }

    /// True when every field passes its validator.
    pub fn is_valid(&self) -> bool {
        self.email_valid() && self.password_valid()
    }

    /// Snapshot the current field values for submission.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    fn revalidate(&mut self) {
        self.email_error = validate_email(&self.email).err();
        self.password_error = validate_password(&self.password).err();
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}
