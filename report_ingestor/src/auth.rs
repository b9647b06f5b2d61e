//! API credentials and bearer token signing.
//!
//! App Store Connect authenticates every request with a short-lived ES256 JWT
//! signed by an API key. [`TokenSigner`] parses the key once and hands out a
//! [`SignedToken`] that carries its own expiry, re-signing when the cached one
//! is about to lapse.

use std::{fs, path::Path, sync::Arc};

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};
use shared_utils::env::{MissingEnvVarError, get_env_vars};
use thiserror::Error;

pub const AUDIENCE: &str = "appstoreconnect-v1";

/// Longest token lifetime the API accepts.
pub const MAX_TOKEN_TTL: Duration = Duration::minutes(20);

/// A cached token is replaced once it is this close to expiring.
const REFRESH_MARGIN: Duration = Duration::seconds(60);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to read credentials file {path}")]
    ReadCredentials {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid credentials file: {0}")]
    ParseCredentials(#[from] serde_yaml::Error),

    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVarError),

    #[error("Invalid private key: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),

    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("Token lifetime must be between 1 second and 20 minutes, got {0} seconds")]
    InvalidTtl(i64),
}

/// API key material. Unknown keys in a credentials file are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    pub key_id: String,
    pub issuer_id: String,
    /// PKCS#8 PEM of the P-256 signing key.
    #[serde(deserialize_with = "secret_from_string")]
    pub private_key: SecretString,
    pub vendor_number: String,
}

fn secret_from_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl Credentials {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, AuthError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| AuthError::ReadCredentials {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Reads `ASC_KEY_ID`, `ASC_ISSUER_ID`, `ASC_PRIVATE_KEY` and
    /// `ASC_VENDOR_NUMBER`.
    pub fn from_env() -> Result<Self, AuthError> {
        let [key_id, issuer_id, private_key, vendor_number] = get_env_vars([
            "ASC_KEY_ID",
            "ASC_ISSUER_ID",
            "ASC_PRIVATE_KEY",
            "ASC_VENDOR_NUMBER",
        ])?;
        Ok(Self {
            key_id,
            issuer_id,
            private_key: SecretString::from(private_key),
            vendor_number,
        })
    }
}

/// A bearer token and the instant after which the API rejects it.
#[derive(Debug)]
pub struct SignedToken {
    pub token: SecretString,
    pub expires_at: DateTime<Utc>,
}

impl SignedToken {
    pub fn expires_within(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        self.expires_at - now <= margin
    }

    pub fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    iat: i64,
    exp: i64,
    aud: &'static str,
}

pub struct TokenSigner {
    key: EncodingKey,
    key_id: String,
    issuer_id: String,
    ttl: Duration,
    cached: ArcSwapOption<SignedToken>,
}

impl TokenSigner {
    pub fn new(credentials: &Credentials, ttl: Duration) -> Result<Self, AuthError> {
        if ttl <= Duration::zero() || ttl > MAX_TOKEN_TTL {
            return Err(AuthError::InvalidTtl(ttl.num_seconds()));
        }
        let key = EncodingKey::from_ec_pem(credentials.private_key.expose_secret().as_bytes())
            .map_err(AuthError::InvalidKey)?;

        Ok(Self {
            key,
            key_id: credentials.key_id.clone(),
            issuer_id: credentials.issuer_id.clone(),
            ttl,
            cached: ArcSwapOption::empty(),
        })
    }

    /// Signs a fresh token issued at `now`. Does not touch the cache.
    pub fn sign(&self, now: DateTime<Utc>) -> Result<SignedToken, AuthError> {
        let expires_at = now + self.ttl;
        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(self.key_id.clone());

        let claims = Claims {
            iss: &self.issuer_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            aud: AUDIENCE,
        };
        let token = encode(&header, &claims, &self.key).map_err(AuthError::Signing)?;

        Ok(SignedToken {
            token: SecretString::from(token),
            expires_at,
        })
    }

    /// Returns the cached token, signing a new one when there is none or it
    /// expires within a minute.
    pub fn token(&self) -> Result<Arc<SignedToken>, AuthError> {
        self.token_at(Utc::now())
    }

    fn token_at(&self, now: DateTime<Utc>) -> Result<Arc<SignedToken>, AuthError> {
        if let Some(current) = self.cached.load_full() {
            if !current.expires_within(now, REFRESH_MARGIN) {
                return Ok(current);
            }
        }
        let fresh = Arc::new(self.sign(now)?);
        self.cached.store(Some(Arc::clone(&fresh)));
        Ok(fresh)
    }
}
