//! Server Configuration
//!
//! Typed view of the process environment, assembled once at startup.

use std::time::Duration;

use auth::AuthConfig;
use auth::application::SeedAdminInput;
use auth::application::config::DEFAULT_TOKEN_TTL;
use platform::config::{self as env, ConfigError, RuntimeMode};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Everything `main` needs to boot
#[derive(Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub frontend_origins: Vec<String>,
    pub mode: RuntimeMode,
    pub auth: AuthConfig,
    /// Bootstrap admin; `None` skips seeding
    pub seed: Option<SeedCredentials>,
}

/// `ADMIN_EMAIL` / `ADMIN_PASSWORD`
pub struct SeedCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SeedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl From<SeedCredentials> for SeedAdminInput {
    fn from(creds: SeedCredentials) -> Self {
        SeedAdminInput {
            email: creds.email,
            password: creds.password,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = match env::optional("APP_ENV") {
            Some(name) => RuntimeMode::from_name(&name),
            None if cfg!(debug_assertions) => RuntimeMode::Development,
            None => RuntimeMode::Production,
        };

        let token_ttl: Duration = env::duration_or("JWT_EXPIRE", DEFAULT_TOKEN_TTL)?;
        let auth = match env::optional("JWT_SECRET") {
            Some(secret) => AuthConfig::new(secret, token_ttl),
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using a random secret; tokens will not survive a restart");
                AuthConfig {
                    token_ttl,
                    ..AuthConfig::with_random_secret()
                }
            }
            None => return Err(ConfigError::Missing("JWT_SECRET".to_string())),
        };

        let seed = match (env::optional("ADMIN_EMAIL"), env::optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(SeedCredentials { email, password }),
            _ => None,
        };

        Ok(Self {
            port: env::parse_or("PORT", DEFAULT_PORT)?,
            database_url: env::required("DATABASE_URL")?,
            frontend_origins: parse_origins(&env::or_default(
                "FRONTEND_URL",
                DEFAULT_FRONTEND_URL,
            )),
            mode,
            auth,
            seed,
        })
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:3000, https://dsa.example.com/ ,"),
            ["http://localhost:3000", "https://dsa.example.com"]
        );
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_seed_credentials_debug_hides_password() {
        let creds = SeedCredentials {
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin@example.com"));
        assert!(!debug.contains("admin123"));
    }
}
