//! Admin authentication extractor.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use inkpress_core::DomainError;
use inkpress_core::ports::{AuthError, TokenClaims};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Authenticated admin identity.
///
/// Use this in handlers to require an admin token:
/// ```ignore
/// async fn protected_route(admin: AdminIdentity) -> impl Responder {
///     format!("Hello, {}!", admin.subject)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub subject: String,
}

impl From<TokenClaims> for AdminIdentity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            subject: claims.subject,
        }
    }
}

/// Token from an `Authorization` header value. Both `Bearer <token>` and a
/// bare token are accepted.
pub(crate) fn bearer_token(value: &str) -> Option<&str> {
    let value = value.trim();
    let token = match value.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest.trim(),
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}

impl AdminIdentity {
    fn authenticate(req: &HttpRequest) -> Result<Self, AppError> {
        let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
            tracing::error!("AppState not found in app data");
            DomainError::Internal("Server configuration error".to_string())
        })?;

        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingAuth)?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

        let token = bearer_token(auth_str).ok_or(AuthError::MissingAuth)?;

        let claims = state.admin.authorize(token)?;
        Ok(Self::from(claims))
    }
}

impl FromRequest for AdminIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::authenticate(req))
    }
}
