/// User resource endpoints
///
/// This module provides the User CRUD surface:
/// - `GET /users` - List all users
/// - `POST /users` - Create a user
/// - `GET /users/:id` - Fetch a user by id
///
/// Handlers translate HTTP requests into persistence calls on the
/// `User` model and serialize results through explicit response
/// structs.

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use userhub_shared::models::user::{NewUser, User};
use validator::Validate;

/// Create user request
///
/// Both fields are optional at the wire level so that missing fields
/// surface as field-level validation errors rather than a
/// deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display/login name
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username must not be empty")
    )]
    pub username: Option<String>,

    /// Email address
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email must not be empty")
    )]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Validates the request and maps it into persistence input
    ///
    /// # Errors
    ///
    /// Returns a validation error naming each missing or empty field.
    pub fn into_new_user(self) -> ApiResult<NewUser> {
        self.validate()?;

        match (self.username, self.email) {
            (Some(username), Some(email)) => Ok(NewUser { username, email }),
            // validate() rejects missing fields before this point
            _ => Err(crate::error::ApiError::Internal(
                "validated request was missing required fields".to_string(),
            )),
        }
    }
}

/// User response body, the wire representation of a persisted user
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user ID
    pub id: i64,

    /// Display/login name
    pub username: String,

    /// Email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// List all users
///
/// # Endpoint
///
/// ```text
/// GET /users
/// ```
///
/// Returns 200 with a (possibly empty) array of
/// `{id, username, email}` objects in insertion order.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = User::list_all(&state.db).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a new user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "a@x.com"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing or empty `username`/`email`; nothing
///   is persisted
/// - `500 Internal Server Error`: storage failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let new_user = req.into_new_user()?;

    let user = User::create(&state.db, new_user).await?;

    tracing::info!(user_id = user.id, "Created user");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Fetch a user by id
///
/// # Endpoint
///
/// ```text
/// GET /users/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no user with the given id
/// - `500 Internal Server Error`: storage failure
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| crate::error::ApiError::NotFound(format!("User with id {} not found", id)))?;

    Ok(Json(UserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn request(username: Option<&str>, email: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            username: username.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request_maps_to_new_user() {
        let new_user = request(Some("alice"), Some("a@x.com"))
            .into_new_user()
            .unwrap();

        assert_eq!(new_user.username, "alice");
        assert_eq!(new_user.email, "a@x.com");
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let err = request(Some("bob"), None).into_new_user().unwrap_err();

        match err {
            ApiError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_both_fields_names_both() {
        let err = request(None, None).into_new_user().unwrap_err();

        match err {
            ApiError::Validation(errors) => {
                let mut fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                fields.sort_unstable();
                assert_eq!(fields, vec!["email", "username"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let err = request(Some(""), Some("a@x.com")).into_new_user().unwrap_err();

        match err {
            ApiError::Validation(errors) => {
                assert_eq!(errors[0].field, "username");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_user_response_mapping() {
        let response = UserResponse::from(User {
            id: 1,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
        });

        assert_eq!(response.id, 1);
        assert_eq!(response.username, "alice");
        assert_eq!(response.email, "a@x.com");
    }
}
