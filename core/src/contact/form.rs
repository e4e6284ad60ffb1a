//! Contact form fields and validation

use crate::error::FormError;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Raw field values as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Service of interest, optional
    #[serde(default)]
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            service: service.into(),
            message: message.into(),
        }
    }

    /// Names of required fields left empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check required fields, then the email shape
    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingRequired { fields: missing });
        }

        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail {
                email: self.email.clone(),
            });
        }

        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// A form that passed validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub form: ContactForm,
}

impl ContactSubmission {
    pub fn new(form: ContactForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form,
        }
    }
}
