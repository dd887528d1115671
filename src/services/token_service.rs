use std::fmt;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::errors::domain::TokenError;
use crate::types::domain::{role_label, PermissionSet, User};
use crate::types::internal::Claims;

/// Manages JWT generation and validation.
///
/// The signing secret and expiry duration are fixed at construction, which
/// happens once at process start from configuration.
pub struct TokenService {
    jwt_secret: String,
    jwt_expiration_minutes: i64,
}

impl TokenService {
    pub fn new(jwt_secret: String, jwt_expiration_minutes: i64) -> Self {
        Self {
            jwt_secret,
            jwt_expiration_minutes,
        }
    }

    /// Issue a signed token for an authenticated user.
    ///
    /// Embeds the username as subject, the numeric user id, the group id and
    /// its display label, and the four capability claims in their string
    /// form. Expiry is absolute: issue time plus the configured duration.
    ///
    /// # Returns
    /// * `Result<String, TokenError>` - The encoded JWT or a signing error
    pub fn issue_token(
        &self,
        user: &User,
        permissions: &PermissionSet,
    ) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.user_name.clone(),
            user_id: user.id,
            user_group_id: user.user_group_id,
            role: role_label(user.user_group_id).to_string(),
            can_create: permissions.create.as_claim().to_string(),
            can_edit: permissions.edit.as_claim().to_string(),
            can_delete: permissions.delete.as_claim().to_string(),
            can_view: permissions.view.as_claim().to_string(),
            iat: now,
            exp: now + self.jwt_expiration_minutes * 60,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Validate a JWT and return its claims.
    ///
    /// # Returns
    /// * `Result<Claims, TokenError>` - Decoded claims, or `Expired` /
    ///   `Invalid` depending on why validation failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}
