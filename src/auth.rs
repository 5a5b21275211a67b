use async_trait::async_trait;
use axum::http::{HeaderMap, header};
use serde::Deserialize;
use tracing::warn;

use crate::error::ApiError;

// Resolved caller identity. The subject id keys the rate-limit bucket,
// the email only shows up in logs.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
    pub email: String,
}

// Verifies a bearer credential against the identity provider. Malformed,
// expired, and unreachable-provider cases all collapse to None.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn resolve_identity(&self, token: &str) -> Option<Identity>;
}

// Supabase-backed authenticator: asks the provider's user endpoint who the
// token belongs to.
pub struct SupabaseAuthenticator {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuthenticator {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            anon_key,
        }
    }
}

#[derive(Deserialize)]
struct SupabaseUser {
    id: String,
    email: Option<String>,
}

#[async_trait]
impl Authenticator for SupabaseAuthenticator {
    async fn resolve_identity(&self, token: &str) -> Option<Identity> {
        let result = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<SupabaseUser>().await {
                    Ok(user) => Some(Identity {
                        subject: user.id,
                        email: user.email.unwrap_or_default(),
                    }),
                    Err(e) => {
                        warn!("Token verification failed: {e}");
                        None
                    }
                }
            }
            Ok(response) => {
                warn!(status = %response.status(), "Invalid token - no user found");
                None
            }
            Err(e) => {
                warn!("Token verification failed: {e}");
                None
            }
        }
    }
}

// Pull the bearer token out of the Authorization header. A non-Bearer
// scheme counts as a missing header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::MissingAuthorization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn missing_header_is_rejected() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(ApiError::MissingAuthorization)
        ));
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
        assert!(matches!(
            bearer_token(&headers),
            Err(ApiError::MissingAuthorization)
        ));
    }
}
