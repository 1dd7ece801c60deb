//! Service-account authentication against the Google OAuth2 endpoint.
//!
//! Firestore REST calls carry a Bearer access token obtained through the
//! JWT-bearer grant: the service account's RSA key signs a short-lived
//! assertion, which the token endpoint exchanges for an access token. Tokens
//! are cached and refreshed five minutes before they expire.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::FirestoreConfig;
use crate::error::{FirestoreError, FirestoreResult};

const SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime requested from the token endpoint.
const ASSERTION_TTL_SECS: u64 = 3600;

/// Tokens are treated as expired this long before their actual expiry.
const REFRESH_MARGIN_SECS: u64 = 300;

/// Cached access token provider for one service account.
pub struct TokenProvider {
    http: reqwest::Client,
    token_uri: String,
    client_email: String,
    key: EncodingKey,
    cached: RwLock<Option<CachedToken>>,
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    exp: u64,
    iat: u64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

impl TokenProvider {
    /// Create a provider, parsing the service account's PEM key up front so
    /// a malformed key fails at startup rather than on the first request.
    pub fn new(http: reqwest::Client, config: &FirestoreConfig) -> FirestoreResult<Self> {
        let key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())?;

        Ok(Self {
            http,
            token_uri: config.token_uri.clone(),
            client_email: config.client_email.clone(),
            key,
            cached: RwLock::new(None),
        })
    }

    /// Return a valid access token, reusing the cached one when fresh.
    pub async fn token(&self) -> FirestoreResult<String> {
        {
            let guard = self.cached.read().await;
            if let Some(cached) = guard.as_ref() {
                if cached.is_valid_at(Instant::now()) {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        let mut guard = self.cached.write().await;
        // Another request may have refreshed while we waited for the lock
        if let Some(cached) = guard.as_ref() {
            if cached.is_valid_at(Instant::now()) {
                return Ok(cached.access_token.clone());
            }
        }

        let fetched = self.exchange().await?;
        let token = fetched.access_token.clone();
        *guard = Some(fetched);
        Ok(token)
    }

    async fn exchange(&self) -> FirestoreResult<CachedToken> {
        let assertion = self.sign_assertion()?;

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FirestoreError::TokenExchange {
                status: status.as_u16(),
            });
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| FirestoreError::Decode(e.to_string()))?;

        let lifetime = body.expires_in.unwrap_or(ASSERTION_TTL_SECS);
        debug!(lifetime_secs = lifetime, "Obtained fresh store access token");

        Ok(CachedToken {
            access_token: body.access_token,
            expires_at: Instant::now()
                + Duration::from_secs(lifetime.saturating_sub(REFRESH_MARGIN_SECS)),
        })
    }

    fn sign_assertion(&self) -> FirestoreResult<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before the Unix epoch")
            .as_secs();

        let claims = Claims {
            iss: &self.client_email,
            scope: SCOPE,
            aud: &self.token_uri,
            exp: now + ASSERTION_TTL_SECS,
            iat: now,
        };

        Ok(encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.key,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_token_validity_window() {
        let now = Instant::now();
        let token = CachedToken {
            access_token: "abc".to_string(),
            expires_at: now + Duration::from_secs(10),
        };
        assert!(token.is_valid_at(now));
        assert!(!token.is_valid_at(now + Duration::from_secs(11)));
    }

    #[test]
    fn test_claims_serialize_with_datastore_scope() {
        let claims = Claims {
            iss: "svc@proj.iam.gserviceaccount.com",
            scope: SCOPE,
            aud: "https://oauth2.googleapis.com/token",
            exp: 1_700_003_600,
            iat: 1_700_000_000,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["scope"], "https://www.googleapis.com/auth/datastore");
        assert_eq!(json["exp"].as_u64().unwrap() - json["iat"].as_u64().unwrap(), 3600);
    }

    #[test]
    fn test_provider_rejects_malformed_key() {
        let config = FirestoreConfig::new("p", "svc@x", "not a pem key");
        let result = TokenProvider::new(reqwest::Client::new(), &config);
        assert!(matches!(result, Err(FirestoreError::Assertion(_))));
    }
}
