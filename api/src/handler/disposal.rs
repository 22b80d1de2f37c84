use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    disposal::{
        event::{CreateDisposal, UpdateApproval},
        ApprovalStatus,
    },
    id::DisposalId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::disposal::{CreateDisposalRequest, DisposalsResponse, DisposalsWithOwnersResponse},
};

/// Completes a claimed totem: records the disposal, credits the points and
/// reopens the totem.
pub async fn register_disposal(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateDisposalRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    registry
        .disposal_repository()
        .create(CreateDisposal::new(user.id(), req.totem_id, req.points))
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_own_disposals(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DisposalsResponse>> {
    registry
        .disposal_repository()
        .find_by_owner(user.id())
        .await
        .map(DisposalsResponse::from)
        .map(Json)
}

/// Admin approval list with resolved owners.
pub async fn show_all_disposals(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DisposalsWithOwnersResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    registry
        .disposal_repository()
        .find_all_with_owners()
        .await
        .map(DisposalsWithOwnersResponse::from)
        .map(Json)
}

pub async fn approve_disposal(
    user: AuthorizedUser,
    Path(disposal_id): Path<DisposalId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    update_approval(user, registry, disposal_id, ApprovalStatus::Approved).await
}

pub async fn reject_disposal(
    user: AuthorizedUser,
    Path(disposal_id): Path<DisposalId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    update_approval(user, registry, disposal_id, ApprovalStatus::Rejected).await
}

async fn update_approval(
    user: AuthorizedUser,
    registry: AppRegistry,
    disposal_id: DisposalId,
    next: ApprovalStatus,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    registry
        .disposal_repository()
        .update_approval(UpdateApproval::new(disposal_id, next))
        .await
        .map(|_| StatusCode::OK)
}
