use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::UserId,
    user::event::{DeleteUser, UpdateUserProfile, UpdateUserRole},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::user::{TotalPointsResponse, UpdateUserProfileRequest, UserResponse, UsersResponse},
};

pub async fn show_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(UserResponse::from(user.user))
}

pub async fn show_user_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    registry
        .user_repository()
        .find_all()
        .await
        .map(UsersResponse::from)
        .map(Json)
}

pub async fn show_total_points(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TotalPointsResponse>> {
    let user_id = user.id();
    registry
        .user_repository()
        .total_points(user_id)
        .await
        .map(|total| Json(TotalPointsResponse { user_id, total }))
}

pub async fn update_current_user_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserProfileRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .user_repository()
        .update_profile(UpdateUserProfile {
            user_id: user.id(),
            user_name: req.user_name,
            age: req.age,
        })
        .await
        .map(|_| StatusCode::OK)
}

pub async fn toggle_user_role(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let target = registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("specified user not found".into()))?;

    registry
        .user_repository()
        .update_role(UpdateUserRole {
            user_id,
            role: target.role.toggled(),
        })
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .user_repository()
        .delete(DeleteUser { user_id })
        .await
        .map(|_| StatusCode::OK)
}
