//! Service account sign-in.
//!
//! A short-lived RS256 JWT signed with the account's private key is exchanged
//! for a bearer token. The token is fetched once per process and lives for an
//! hour, far longer than any single command.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Client;
use tracing::debug;

use crate::sheets::types::{Claims, ServiceAccountKey, TokenResponse};
use crate::store::StoreError;

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;

pub struct ServiceAccount {
    key: ServiceAccountKey,
}

impl ServiceAccount {
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Credentials {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        Ok(Self {
            key: serde_json::from_str(content)?,
        })
    }

    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }

    pub fn claims(&self, now: u64) -> Claims {
        Claims {
            iss: self.key.client_email.clone(),
            scope: SHEETS_SCOPE.to_string(),
            aud: self.key.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        }
    }

    /// Signed JWT assertion for the token endpoint.
    pub fn assertion(&self, now: u64) -> Result<String, StoreError> {
        let key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        let token = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &self.claims(now), &key)?;
        Ok(token)
    }

    /// Exchanges a fresh assertion for an access token.
    pub async fn access_token(&self, http: &Client) -> Result<String, StoreError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let assertion = self.assertion(now)?;

        debug!("requesting access token for {}", self.key.client_email);
        let response = http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Auth(format!("token endpoint returned {status}: {body}")));
        }

        let token: TokenResponse = response.json().await?;
        debug!("access token valid for {}s", token.expires_in);
        Ok(token.access_token)
    }
}
