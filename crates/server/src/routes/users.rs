use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use service::auth::domain::{AccessToken, CreateUserInput, GetJwtInput};
use uuid::Uuid;

use crate::{auth::ServerState, errors::JsonApiError};

/// Public view of a registered user; the password hash never leaves the service.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserOutput { pub id: Uuid, pub name: String, pub email: String }

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::CreateUserDoc,
    responses(
        (status = 201, description = "Registered", body = UserOutput),
        (status = 400, description = "Bad Request"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn create_user(
    State(state): State<ServerState>,
    Json(input): Json<CreateUserInput>,
) -> Result<(StatusCode, Json<UserOutput>), JsonApiError> {
    let user = state.users.register(input).await?;
    Ok((StatusCode::CREATED, Json(UserOutput { id: user.id, name: user.name, email: user.email })))
}

#[utoipa::path(
    post, path = "/users/generate_token", tag = "users",
    request_body = crate::openapi::GetJwtDoc,
    responses(
        (status = 200, description = "Token issued", body = crate::openapi::AccessTokenDoc),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn generate_token(
    State(state): State<ServerState>,
    Json(input): Json<GetJwtInput>,
) -> Result<Json<AccessToken>, JsonApiError> {
    Ok(Json(state.users.generate_token(input).await?))
}
