use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{auth::event::CreateToken, user::event::CreateUser};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::auth::{AccessTokenResponse, LoginRequest, RegisterRequest},
};

pub async fn register(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    // Fails on password/confirmation mismatch before touching the store.
    let event = CreateUser::try_from(req)?;
    registry
        .user_repository()
        .create(event)
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate()?;

    let user_id = registry
        .auth_repository()
        .verify_user(&req.email, &req.password)
        .await?;
    let access_token = registry
        .auth_repository()
        .create_token(CreateToken::new(user_id))
        .await?;
    Ok(Json(AccessTokenResponse {
        user_id,
        access_token: access_token.0,
    }))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(user.access_token)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
