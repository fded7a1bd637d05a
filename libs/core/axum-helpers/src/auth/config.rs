//! JWT configuration loaded through `core_config::FromEnv`.

use core_config::{ConfigError, FromEnv, env_parse, env_required};

/// Minimum accepted length of the HS256 signing secret.
pub const MIN_SECRET_LEN: usize = 32;

/// JWT authentication configuration.
///
/// - `JWT_SECRET` (required, at least 32 characters)
/// - `JWT_ACCESS_TTL_SECS` (default 900)
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_ttl: i64,
}

impl JwtConfig {
    /// Build a config by hand, mostly for tests.
    ///
    /// # Panics
    /// Panics if the secret is shorter than [`MIN_SECRET_LEN`].
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            access_token_ttl: super::jwt::ACCESS_TOKEN_TTL,
        }
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least {} characters (got {}). Generate one with: openssl rand -base64 32",
                    MIN_SECRET_LEN,
                    secret.len()
                ),
            });
        }

        let access_token_ttl = env_parse("JWT_ACCESS_TTL_SECS", "900")?;

        Ok(Self {
            secret,
            access_token_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_secret() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn test_from_env_rejects_short_secret() {
        temp_env::with_var("JWT_SECRET", Some("too-short"), || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("at least 32"));
        });
    }

    #[test]
    fn test_from_env_reads_ttl() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some("0123456789abcdef0123456789abcdef")),
                ("JWT_ACCESS_TTL_SECS", Some("60")),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.access_token_ttl, 60);
            },
        );
    }

    #[test]
    #[should_panic(expected = "at least 32")]
    fn test_new_panics_on_short_secret() {
        JwtConfig::new("short");
    }
}
