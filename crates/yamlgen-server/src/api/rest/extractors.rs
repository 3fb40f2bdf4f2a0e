//! Custom extractors
//!
//! JSON bodies with uniform 400 responses, and bearer-token owners.

use super::types::AppState;
use crate::auth::bearer_token;
use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    Json,
};
use tracing::debug;

/// Custom JSON extractor with better error messages
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                let error_message = match rejection {
                    JsonRejection::JsonDataError(err) => {
                        format!("Invalid JSON data: {}", err.body_text())
                    }
                    JsonRejection::JsonSyntaxError(err) => {
                        format!("JSON syntax error: {}", err.body_text())
                    }
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing 'Content-Type: application/json' header".to_string()
                    }
                    _ => format!("Failed to parse JSON: {}", rejection),
                };

                Err(ServerError::InvalidRequest(error_message))
            }
        }
    }
}

/// Owner id of a request carrying a valid bearer token
///
/// Rejects with 401 when no token is present and 403 when the token does
/// not verify. Runs on request parts, so it resolves before any body
/// extractor.
#[derive(Debug, Clone)]
pub struct AuthenticatedOwner(pub String);

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthenticatedOwner {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = bearer_token(header)?;

        let claims = state.verifier.verify(token).map_err(|e| {
            debug!("Rejected bearer token: {}", e);
            e
        })?;

        Ok(AuthenticatedOwner(claims.id))
    }
}
