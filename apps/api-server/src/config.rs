//! Application configuration loaded from environment variables.

use std::env;

use inkpress_core::service::AdminCredentials;
use inkpress_infra::JwtConfig;

#[cfg(feature = "postgres")]
use inkpress_infra::DatabaseConfig;

#[cfg(feature = "imagekit")]
use inkpress_infra::ImageKitConfig;

/// Default cap on uploaded cover images (5 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    #[cfg(feature = "imagekit")]
    pub imagekit: Option<ImageKitConfig>,
    pub admin: Option<AdminCredentials>,
    pub jwt: JwtConfig,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            #[cfg(feature = "postgres")]
            database,
            #[cfg(feature = "imagekit")]
            imagekit: ImageKitConfig::from_env(),
            admin: Self::admin_credentials(),
            jwt: JwtConfig::from_env(),
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES").unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    /// ADMIN_EMAIL plus ADMIN_PASSWORD_HASH (an Argon2 PHC string,
    /// see the `hash-password` binary).
    fn admin_credentials() -> Option<AdminCredentials> {
        let email = env::var("ADMIN_EMAIL").ok()?;
        let password_hash = env::var("ADMIN_PASSWORD_HASH").ok()?;

        Some(AdminCredentials {
            email,
            password_hash,
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
