use crate::error::{google_auth_error, SyncResult};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

const TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Service account identity used to sign token assertions
#[derive(Debug, Clone)]
pub struct ServiceAccountKey {
    /// Service account email (the JWT issuer)
    pub client_email: String,
    /// RSA private key in PEM form
    pub private_key: String,
}

/// Claims for the OAuth2 JWT-bearer assertion
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: i64,
}

/// Manages a scoped Google access token for a service account.
///
/// Tokens are cached in process memory and refreshed when within a minute
/// of expiry. Each manager holds one scope; components needing different
/// scopes hold their own manager.
#[derive(Clone)]
pub struct TokenManager {
    key: ServiceAccountKey,
    scope: String,
    client: Client,
    cached: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenManager {
    pub fn new(key: ServiceAccountKey, scope: String) -> Self {
        Self {
            key,
            scope,
            client: Client::new(),
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Get a valid access token, refreshing it if expired
    pub async fn access_token(&self) -> SyncResult<String> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref() {
                // Refresh within a minute of expiry
                if token.expires_at > Utc::now().timestamp() + 60 {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();

        let mut cached = self.cached.write().await;
        *cached = Some(token);

        Ok(access_token)
    }

    /// Exchange a signed assertion for an access token
    async fn request_token(&self) -> SyncResult<CachedToken> {
        let assertion = self.sign_assertion()?;

        let params = [
            ("grant_type", JWT_BEARER_GRANT),
            ("assertion", assertion.as_str()),
        ];

        let response = self
            .client
            .post(TOKEN_URI)
            .form(&params)
            .send()
            .await
            .map_err(|e| google_auth_error(&format!("Failed to request token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_auth_error(&format!(
                "Failed to request token: HTTP {} - {}",
                status, error_body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| google_auth_error(&format!("Failed to parse token response: {}", e)))?;

        debug!("Obtained access token for scope {}", self.scope);

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Utc::now().timestamp() + token.expires_in,
        })
    }

    /// Sign the RS256 JWT-bearer assertion for this scope
    fn sign_assertion(&self) -> SyncResult<String> {
        let iat = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: &self.scope,
            aud: TOKEN_URI,
            iat,
            exp: iat + 3600,
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(|e| google_auth_error(&format!("Invalid service account key: {}", e)))?;

        encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| google_auth_error(&format!("Failed to sign assertion: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_claims_serialization() {
        let claims = AssertionClaims {
            iss: "sync@project.iam.gserviceaccount.com",
            scope: "https://www.googleapis.com/auth/spreadsheets",
            aud: TOKEN_URI,
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["iss"], "sync@project.iam.gserviceaccount.com");
        assert_eq!(json["aud"], "https://oauth2.googleapis.com/token");
        assert_eq!(json["exp"].as_i64().unwrap() - json["iat"].as_i64().unwrap(), 3600);
    }

    #[test]
    fn test_token_response_default_expiry() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token": "ya29.test"}"#).unwrap();
        assert_eq!(token.access_token, "ya29.test");
        assert_eq!(token.expires_in, 3600);
    }

    #[test]
    fn test_sign_assertion_rejects_bad_key() {
        let manager = TokenManager::new(
            ServiceAccountKey {
                client_email: "sync@project.iam.gserviceaccount.com".to_string(),
                private_key: "not a pem".to_string(),
            },
            "https://www.googleapis.com/auth/calendar.readonly".to_string(),
        );

        assert!(manager.sign_assertion().is_err());
    }
}
