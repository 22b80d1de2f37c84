use std::convert::Infallible;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::{stream, Stream, StreamExt};
use garde::Validate;
use kernel::model::{
    id::TotemId,
    totem::{
        event::{ClaimTotem, CreateTotem, DeleteTotem, ReleaseTotem, StartTotem},
        TotemStatus,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use tokio_stream::wrappers::BroadcastStream;

use crate::{
    extractor::AuthorizedUser,
    model::totem::{CreateTotemRequest, TotemListQuery, TotemResponse, TotensResponse},
};

pub async fn register_totem(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateTotemRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate()?;

    registry
        .totem_repository()
        .create(CreateTotem {
            name: req.name,
            registered_by: user.id(),
        })
        .await
        .map(|_| StatusCode::CREATED)
}

/// Admin management list, optionally narrowed by status.
pub async fn show_totem_list(
    user: AuthorizedUser,
    Query(query): Query<TotemListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TotensResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    let totens = match query.status {
        Some(status) => {
            registry
                .totem_repository()
                .find_by_status(status.into())
                .await?
        }
        None => registry.totem_repository().find_all().await?,
    };
    Ok(Json(TotensResponse::from(totens)))
}

/// The user-facing view: totens open for a disposal claim.
pub async fn show_available_totens(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TotensResponse>> {
    registry
        .totem_repository()
        .find_by_status(TotemStatus::Iniciado)
        .await
        .map(TotensResponse::from)
        .map(Json)
}

pub async fn show_totem(
    _user: AuthorizedUser,
    Path(totem_id): Path<TotemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TotemResponse>> {
    registry
        .totem_repository()
        .find_by_id(totem_id)
        .await
        .and_then(|totem| match totem {
            Some(totem) => Ok(Json(totem.into())),
            None => Err(AppError::EntityNotFound("specified totem not found".into())),
        })
}

pub async fn claim_totem(
    user: AuthorizedUser,
    Path(totem_id): Path<TotemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .totem_repository()
        .claim(ClaimTotem::new(totem_id, user.id()))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn start_totem(
    user: AuthorizedUser,
    Path(totem_id): Path<TotemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    registry
        .totem_repository()
        .start(StartTotem { totem_id })
        .await
        .map(|_| StatusCode::OK)
}

pub async fn release_totem(
    user: AuthorizedUser,
    Path(totem_id): Path<TotemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    registry
        .totem_repository()
        .release(ReleaseTotem { totem_id })
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_totem(
    user: AuthorizedUser,
    Path(totem_id): Path<TotemId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    registry
        .totem_repository()
        .delete(DeleteTotem { totem_id })
        .await
        .map(|_| StatusCode::OK)
}

/// Live view of the available totens. Emits the current `iniciado`
/// snapshot immediately and again after every totem mutation, so clients
/// replace their list wholesale on each event.
pub async fn available_totem_stream(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let changes = BroadcastStream::new(registry.totem_repository().subscribe());
    // A lagged receiver still maps to "something changed"; the snapshot
    // refetch absorbs any missed notifications.
    let ticks = stream::once(async {}).chain(changes.map(|_| ()));

    let stream = ticks
        .then(move |_| {
            let registry = registry.clone();
            async move {
                registry
                    .totem_repository()
                    .find_by_status(TotemStatus::Iniciado)
                    .await
            }
        })
        .filter_map(|res| async move {
            let totens = match res {
                Ok(totens) => totens,
                Err(e) => {
                    tracing::warn!(error.message = %e, "failed to refresh totem snapshot");
                    return None;
                }
            };
            match Event::default()
                .event("snapshot")
                .json_data(TotensResponse::from(totens))
            {
                Ok(event) => Some(Ok::<_, Infallible>(event)),
                Err(e) => {
                    tracing::warn!(error.message = %e, "failed to encode totem snapshot");
                    None
                }
            }
        });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
