// SPDX-License-Identifier: MPL-2.0
//! Contact form data and validation rules.

use regex_lite::Regex;
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld`: no whitespace or extra `@` in any part.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Contact form fields, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// The `name` attribute of the matching form control.
    #[must_use]
    pub fn control_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Phone)
    }
}

/// Values submitted with the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormData {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks required fields first, then the email format.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingRequiredFields { fields: missing });
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Simple address check: something, `@`, something, `.`, something.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    // The pattern's `\s` is ASCII-only.
    if email.chars().any(|c| c.is_whitespace() || c == '\u{feff}') {
        return false;
    }
    match EMAIL_PATTERN.as_ref() {
        Some(pattern) => pattern.is_match(email),
        None => false,
    }
}

/// Reasons a submission is rejected before it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are empty.
    MissingRequiredFields { fields: Vec<Field> },
    /// The email does not look like an address.
    InvalidEmail,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredFields { .. } => "notification-form-missing-fields",
            ValidationError::InvalidEmail => "notification-form-invalid-email",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingRequiredFields { fields } => {
                let names: Vec<&str> = fields.iter().map(|f| f.control_name()).collect();
                write!(f, "Missing required fields: {}", names.join(", "))
            }
            ValidationError::InvalidEmail => write!(f, "Invalid email address"),
        }
    }
}

impl std::error::Error for ValidationError {}
