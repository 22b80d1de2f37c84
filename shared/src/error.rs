use axum::{http::StatusCode, response::IntoResponse};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    AlreadyClaimed(String),
    #[error("{0}")]
    InvalidTransition(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("transaction failed")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("key-value store operation failed")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("password hashing failed")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("failed to convert to uuid")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("authentication required")]
    UnauthenticatedError,
    #[error("operation not permitted for this role")]
    ForbiddenOperation,
    #[error("{0}")]
    ConversionEntityError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyClaimed(_) | AppError::InvalidTransition(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) | AppError::ConvertToUuidError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidCredentials | AppError::UnauthenticatedError => {
                StatusCode::UNAUTHORIZED
            }
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::BcryptError(_) | AppError::ConversionEntityError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        } else {
            tracing::warn!(
                error.cause_chain = ?self,
                error.message = %self,
                "request rejected"
            );
        }
        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_failures_map_to_unavailable() {
        let err = AppError::SpecificOperationError(sqlx::Error::PoolClosed);
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn claim_conflict_maps_to_conflict() {
        let err = AppError::AlreadyClaimed("totem busy".into());
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }
}
