use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo::User;

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Request body for signup. Fields are optional at the serde layer so a
/// missing field becomes a validation message rather than a body rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub terms_accepted: bool,
}

/// Normalized signup input, produced only when every rule passed.
#[derive(Debug)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub terms_accepted: bool,
}

impl SignupRequest {
    /// Checks every rule and collects all failures instead of stopping at
    /// the first. Email is trimmed and lowercased, name is trimmed.
    pub fn validate(self) -> Result<SignupInput, Vec<String>> {
        let mut errors = Vec::new();

        let name = self.name.map(|n| n.trim().to_string()).unwrap_or_default();
        if name.is_empty() {
            errors.push("Name is required".to_string());
        }

        let email = self
            .email
            .map(|e| e.trim().to_lowercase())
            .unwrap_or_default();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !is_valid_email(&email) {
            errors.push("Invalid email format".to_string());
        }

        let password = self.password.unwrap_or_default();
        if password.is_empty() {
            errors.push("Password is required".to_string());
        } else if password.len() < 6 {
            errors.push("Password must be at least 6 characters".to_string());
        }

        if !self.terms_accepted {
            errors.push("You must accept the terms".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SignupInput {
            name,
            email,
            password,
            terms_accepted: self.terms_accepted,
        })
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

/// Response returned after a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub user: PublicUser,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
}
