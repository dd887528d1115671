use poem_openapi::payload::{Json, PlainText};
use poem_openapi::ApiResponse;

use crate::errors::domain::{AccessError, CredentialError, TokenError, UserError};
use crate::types::dto::common::ErrorResponse;

/// Error responses for the login endpoint.
///
/// Failed credential checks answer 401 with a plain-text reason string; the
/// body is exactly the message of the check that failed.
#[derive(ApiResponse, Debug)]
pub enum LoginError {
    /// Credential check failed
    #[oai(status = 401)]
    Unauthorized(PlainText<String>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl LoginError {
    pub fn internal_error() -> Self {
        LoginError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }
}

impl From<CredentialError> for LoginError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Store(source) => {
                tracing::error!(error = %source, "login failed against the user store");
                LoginError::internal_error()
            }
            reason => LoginError::Unauthorized(PlainText(reason.to_string())),
        }
    }
}

impl From<TokenError> for LoginError {
    fn from(err: TokenError) -> Self {
        tracing::error!(error = %err, "failed to issue session token");
        LoginError::internal_error()
    }
}

/// Error responses for the protected user endpoints.
#[derive(ApiResponse, Debug)]
pub enum UserApiError {
    /// Validation failed or the username is already taken
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Missing, invalid, or expired bearer token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Authenticated but the token's claims do not permit the operation
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// No user with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UserApiError {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        UserApiError::BadRequest(Json(ErrorResponse {
            error: error.into(),
            message: message.into(),
            status_code: 400,
        }))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        UserApiError::Unauthorized(Json(ErrorResponse {
            error: "unauthenticated".to_string(),
            message: message.into(),
            status_code: 401,
        }))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        UserApiError::Forbidden(Json(ErrorResponse {
            error: "forbidden".to_string(),
            message: message.into(),
            status_code: 403,
        }))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        UserApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: message.into(),
            status_code: 404,
        }))
    }

    pub fn internal_error() -> Self {
        UserApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }
}

impl From<TokenError> for UserApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired | TokenError::Invalid => UserApiError::unauthorized(err.to_string()),
            TokenError::Signing(message) => {
                tracing::error!(error = %message, "token signing failed");
                UserApiError::internal_error()
            }
        }
    }
}

impl From<AccessError> for UserApiError {
    fn from(err: AccessError) -> Self {
        UserApiError::forbidden(err.to_string())
    }
}

impl From<UserError> for UserApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => UserApiError::not_found(err.to_string()),
            UserError::DuplicateUsername(_) => {
                UserApiError::bad_request("duplicate_username", err.to_string())
            }
            UserError::Validation(_) => UserApiError::bad_request("validation_error", err.to_string()),
            UserError::Store(source) => {
                tracing::error!(error = %source, "user store operation failed");
                UserApiError::internal_error()
            }
        }
    }
}
