use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};

use crate::api::auth::BearerAuth;
use crate::auth::guard;
use crate::errors::api::UserApiError;
use crate::services::{TokenService, UserService};
use crate::types::domain::Capability;
use crate::types::dto::user::{
    CreateUserResponse, NoContentResponse, SaveUserRequest, UserResponse,
};
use crate::types::internal::Claims;

/// User management API endpoints
///
/// Every operation validates the bearer token first and then applies the
/// guard for the capability it requires.
pub struct UsersApi {
    user_service: Arc<UserService>,
    token_service: Arc<TokenService>,
}

impl UsersApi {
    pub fn new(user_service: Arc<UserService>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_service,
            token_service,
        }
    }

    fn claims(&self, auth: &BearerAuth) -> Result<Claims, UserApiError> {
        Ok(self.token_service.validate_token(&auth.0.token)?)
    }
}

/// API tags for user management endpoints
#[derive(Tags)]
enum UserTags {
    /// User management endpoints
    Users,
}

#[OpenApi(prefix_path = "/users")]
impl UsersApi {
    /// List all users
    #[oai(path = "/", method = "get", tag = "UserTags::Users")]
    pub async fn list_users(&self, auth: BearerAuth) -> Result<Json<Vec<UserResponse>>, UserApiError> {
        let claims = self.claims(&auth)?;
        guard::require(&claims, Capability::View)?;

        let users = self.user_service.list().await?;
        Ok(Json(users.into_iter().map(UserResponse::from).collect()))
    }

    /// Search users by first and last name
    ///
    /// Case-insensitive substring match on both profile fields; an omitted
    /// or empty parameter matches every record on that field.
    #[oai(path = "/search", method = "get", tag = "UserTags::Users")]
    pub async fn search_users(
        &self,
        auth: BearerAuth,
        #[oai(name = "firstName")] first_name: Query<Option<String>>,
        #[oai(name = "lastName")] last_name: Query<Option<String>>,
    ) -> Result<Json<Vec<UserResponse>>, UserApiError> {
        let claims = self.claims(&auth)?;
        guard::require(&claims, Capability::View)?;

        let users = self
            .user_service
            .search(
                first_name.0.as_deref().unwrap_or(""),
                last_name.0.as_deref().unwrap_or(""),
            )
            .await?;
        Ok(Json(users.into_iter().map(UserResponse::from).collect()))
    }

    /// Get a single user by id
    #[oai(path = "/:id", method = "get", tag = "UserTags::Users")]
    pub async fn get_user(
        &self,
        auth: BearerAuth,
        id: Path<i64>,
    ) -> Result<Json<UserResponse>, UserApiError> {
        let claims = self.claims(&auth)?;
        guard::require(&claims, Capability::View)?;

        let user = self.user_service.get(id.0).await?;
        Ok(Json(UserResponse::from(user)))
    }

    /// Create a new user
    #[oai(path = "/", method = "post", tag = "UserTags::Users")]
    pub async fn create_user(
        &self,
        auth: BearerAuth,
        body: Json<SaveUserRequest>,
    ) -> Result<CreateUserResponse, UserApiError> {
        let claims = self.claims(&auth)?;
        guard::require(&claims, Capability::Create)?;

        let user = self.user_service.create(body.0.into()).await?;
        let location = format!("/api/users/{}", user.id);
        Ok(CreateUserResponse::Created(
            Json(UserResponse::from(user)),
            location,
        ))
    }

    /// Update an existing user
    ///
    /// Allowed with a full edit grant, or with a "self" grant when the path
    /// id is the caller's own id. The authorization check runs before the
    /// record is looked up, so a self-only caller cannot probe other ids.
    #[oai(path = "/:id", method = "put", tag = "UserTags::Users")]
    pub async fn update_user(
        &self,
        auth: BearerAuth,
        id: Path<i64>,
        body: Json<SaveUserRequest>,
    ) -> Result<NoContentResponse, UserApiError> {
        let claims = self.claims(&auth)?;
        guard::require_edit(&claims, id.0)?;

        self.user_service.update(id.0, body.0.into()).await?;
        Ok(NoContentResponse::NoContent)
    }

    /// Delete a user
    #[oai(path = "/:id", method = "delete", tag = "UserTags::Users")]
    pub async fn delete_user(
        &self,
        auth: BearerAuth,
        id: Path<i64>,
    ) -> Result<NoContentResponse, UserApiError> {
        let claims = self.claims(&auth)?;
        guard::require(&claims, Capability::Delete)?;

        self.user_service.delete(id.0).await?;
        Ok(NoContentResponse::NoContent)
    }
}
