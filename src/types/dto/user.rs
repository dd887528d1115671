use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::domain::{User, UserDraft};

/// A user record as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "PascalCase")]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    /// Numeric user id
    pub id: i64,

    /// Unique username
    pub user_name: String,

    /// Stored password (plaintext, as the system persists it)
    pub password: String,

    /// Whether the account may log in
    pub active: bool,

    /// Group id, absent for unassigned users
    pub user_group_id: Option<i32>,

    /// Nested profile data
    pub profile: UserProfileResponse,
}

/// Profile section of a user response
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "PascalCase")]
#[serde(rename_all = "PascalCase")]
pub struct UserProfileResponse {
    /// When the record was created (ISO 8601 format)
    pub creation_date: String,

    pub first_name: String,

    pub last_name: String,

    pub phone: String,

    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            password: user.password,
            active: user.active,
            user_group_id: user.user_group_id,
            profile: UserProfileResponse {
                creation_date: user.profile.creation_date.to_rfc3339(),
                first_name: user.profile.first_name,
                last_name: user.profile.last_name,
                phone: user.profile.phone,
                email: user.profile.email,
            },
        }
    }
}

/// Request body for creating or updating a user
///
/// Updates overwrite every field here; id and creation date are assigned by
/// the server and cannot be set from the wire.
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "PascalCase")]
#[serde(rename_all = "PascalCase")]
pub struct SaveUserRequest {
    /// Unique username (required, non-empty)
    pub user_name: String,

    /// Password (required, non-empty)
    pub password: String,

    /// Whether the account may log in
    pub active: bool,

    /// Group id; omit to leave the user unassigned
    pub user_group_id: Option<i32>,

    /// Profile fields
    pub profile: SaveUserProfile,
}

/// Profile section of a save request
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "PascalCase")]
#[serde(rename_all = "PascalCase")]
pub struct SaveUserProfile {
    pub first_name: String,

    pub last_name: String,

    pub phone: String,

    pub email: String,
}

impl From<SaveUserRequest> for UserDraft {
    fn from(request: SaveUserRequest) -> Self {
        Self {
            user_name: request.user_name,
            password: request.password,
            active: request.active,
            user_group_id: request.user_group_id,
            first_name: request.profile.first_name,
            last_name: request.profile.last_name,
            phone: request.profile.phone,
            email: request.profile.email,
        }
    }
}

/// API response for user creation
#[derive(ApiResponse)]
pub enum CreateUserResponse {
    /// User created; Location points at the new resource
    #[oai(status = 201)]
    Created(Json<UserResponse>, #[oai(header = "Location")] String),
}

/// API response for operations that return no body
#[derive(ApiResponse)]
pub enum NoContentResponse {
    /// Operation completed
    #[oai(status = 204)]
    NoContent,
}
