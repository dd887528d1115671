use std::sync::Arc;

use poem_openapi::auth::Bearer;
use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, SecurityScheme, Tags};

use crate::errors::api::LoginError;
use crate::services::{AuthService, TokenService};
use crate::types::domain::capabilities_for;
use crate::types::dto::auth::{LoginRequest, TokenResponse};

/// Authentication API endpoints
pub struct AuthApi {
    auth_service: Arc<AuthService>,
    token_service: Arc<TokenService>,
}

impl AuthApi {
    pub fn new(auth_service: Arc<AuthService>, token_service: Arc<TokenService>) -> Self {
        Self {
            auth_service,
            token_service,
        }
    }
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with username and password to receive a session token
    ///
    /// The token embeds the caller's identity and the capability claims of
    /// their group at this moment; group changes take effect on re-login.
    /// A failed login answers 401 with a plain-text reason naming the check
    /// that failed.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    pub async fn login(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, LoginError> {
        let user = self
            .auth_service
            .authenticate(&body.user_name, &body.password)
            .await?;

        let permissions = capabilities_for(user.user_group_id);
        let token = self.token_service.issue_token(&user, &permissions)?;

        Ok(Json(TokenResponse { token }))
    }
}
