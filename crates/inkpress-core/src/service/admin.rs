//! Admin login and token checks.

use std::sync::Arc;

use crate::error::DomainError;
use crate::ports::{AuthError, PasswordService, TokenClaims, TokenService};

/// Role carried by admin tokens.
pub const ADMIN_ROLE: &str = "admin";

/// The single admin account.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

pub struct AdminAuthService {
    credentials: Option<AdminCredentials>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AdminAuthService {
    pub fn new(
        credentials: Option<AdminCredentials>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        if credentials.is_none() {
            tracing::warn!("Admin credentials not configured. Admin login is disabled.");
        }

        Self {
            credentials,
            passwords,
            tokens,
        }
    }

    /// Check the admin credentials and issue an access token.
    pub fn login(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let Some(credentials) = &self.credentials else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !email.trim().eq_ignore_ascii_case(&credentials.email) {
            tracing::warn!("Admin login rejected: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !self.passwords.verify(password, &credentials.password_hash)? {
            tracing::warn!("Admin login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self
            .tokens
            .generate_token(&credentials.email, vec![ADMIN_ROLE.to_string()])?;
        tracing::info!("Admin logged in");

        Ok(token)
    }

    /// Validate a token and require the admin role.
    pub fn authorize(&self, token: &str) -> Result<TokenClaims, DomainError> {
        let claims = self.tokens.validate_token(token)?;
        if !claims.has_role(ADMIN_ROLE) {
            return Err(AuthError::InsufficientPermissions.into());
        }

        Ok(claims)
    }

    pub fn token_lifetime_seconds(&self) -> i64 {
        self.tokens.expiration_seconds()
    }
}
