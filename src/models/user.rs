use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::FieldError;

pub const USERNAME_MAX_LEN: usize = 80;
pub const EMAIL_MAX_LEN: usize = 120;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Stored account record. The password hash stays in the stores; everything
/// that goes over the wire is `PublicUser`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl RegisterUser {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.username.trim().is_empty() {
            errors.push(FieldError::new("username", "Username is required"));
        } else if self.username.chars().count() > USERNAME_MAX_LEN {
            errors.push(FieldError::new(
                "username",
                format!("Username must be less than {} characters", USERNAME_MAX_LEN),
            ));
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !self.email.contains('@') {
            errors.push(FieldError::new("email", "Invalid email address"));
        } else if self.email.chars().count() > EMAIL_MAX_LEN {
            errors.push(FieldError::new(
                "email",
                format!("Email must be less than {} characters", EMAIL_MAX_LEN),
            ));
        }

        if self.password.chars().count() < PASSWORD_MIN_LEN {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {} characters", PASSWORD_MIN_LEN),
            ));
        }

        errors
    }
}
