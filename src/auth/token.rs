use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::Identity;
use crate::error::AppError;
use crate::models::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies the HS256 session tokens the API hands out at
/// register/login. There is no server-side session state; logout is the
/// client discarding its token.
#[derive(Clone)]
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl SessionTokens {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user.id,
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| AppError::Internal(format!("Failed to sign session token: {}", err)))
    }

    /// Expired, tampered, or otherwise invalid tokens all collapse into one
    /// 401 answer; the caller learns nothing about which check failed.
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        let validation = Validation::new(Algorithm::HS256);
        let decoded = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))?;

        Ok(Identity {
            user_id: decoded.claims.sub,
            username: decoded.claims.username,
        })
    }
}
