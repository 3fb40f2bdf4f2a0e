//! Bearer-token verification
//!
//! The HTTP layer only needs an owner id from a token. [`TokenVerifier`] is
//! that contract; [`JwtAuthenticator`] fulfils it with HS256 JWTs signed by
//! a secret from runtime configuration. Tokens carry the owner in an `id`
//! claim; `exp` is checked when present but not required.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors from token handling
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authentication token required")]
    MissingToken,

    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Claims extracted from a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerClaims {
    /// Owner identifier; numeric ids are accepted and kept as text
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Anything that can turn a bearer token into an owner
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<OwnerClaims, AuthError>;
}

/// HS256 JWT issuer and verifier
pub struct JwtAuthenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtAuthenticator {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign a token for `owner_id`, optionally expiring after `ttl`
    ///
    /// There is no login endpoint; this exists for tooling and tests.
    pub fn issue(&self, owner_id: &str, ttl: Option<Duration>) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = OwnerClaims {
            id: owner_id.to_string(),
            iat: Some(now),
            exp: ttl.map(|ttl| now.saturating_add(ttl.as_secs() as i64)),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
}

impl TokenVerifier for JwtAuthenticator {
    fn verify(&self, token: &str) -> Result<OwnerClaims, AuthError> {
        let data = decode::<OwnerClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.id.trim().is_empty() {
            return Err(AuthError::InvalidToken("token has no owner id".to_string()));
        }
        Ok(data.claims)
    }
}

/// Pull the token out of an `Authorization` header value
///
/// The token is the second whitespace-separated field (`Bearer <token>`);
/// the scheme word itself is not checked.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|value| value.split_whitespace().nth(1))
        .ok_or(AuthError::MissingToken)
}
