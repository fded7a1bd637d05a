use super::config::JwtConfig;
use super::principal::Principal;
use chrono::Utc;
use eyre::WrapErr;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Default access token lifetime in seconds (15 minutes)
pub const ACCESS_TOKEN_TTL: i64 = 900;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,        // Subject (user ID)
    pub email: String,      // User email
    pub name: String,       // User name
    pub roles: Vec<String>, // User roles
    pub exp: i64,           // Expiration time
    pub iat: i64,           // Issued at
}

impl From<JwtClaims> for Principal {
    fn from(claims: JwtClaims) -> Self {
        Principal {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
            roles: claims.roles,
        }
    }
}

/// Stateless HS256 token issuer and verifier.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_token_ttl: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!(ttl_secs = config.access_token_ttl, "JWT auth initialized");
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation: Validation::default(),
            access_token_ttl: config.access_token_ttl,
        }
    }

    /// Sign an access token carrying the given principal.
    pub fn create_access_token(&self, principal: &Principal) -> eyre::Result<String> {
        let now = Utc::now().timestamp();
        let claims = JwtClaims {
            sub: principal.id.clone(),
            email: principal.email.clone(),
            name: principal.name.clone(),
            roles: principal.roles.clone(),
            exp: now + self.access_token_ttl,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .wrap_err_with(|| format!("Failed to sign access token for {}", principal.id))
    }

    /// Check signature and expiry, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, jsonwebtoken::errors::Error> {
        decode::<JwtClaims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}
