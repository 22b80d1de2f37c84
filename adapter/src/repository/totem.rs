use async_trait::async_trait;
use kernel::model::{
    id::TotemId,
    totem::{
        event::{ClaimTotem, CreateTotem, DeleteTotem, ReleaseTotem, StartTotem},
        Totem, TotemStatus,
    },
};
use kernel::repository::totem::TotemRepository;
use shared::error::{AppError, AppResult};
use tokio::sync::broadcast;

use crate::database::{model::totem::TotemRow, ConnectionPool};

pub struct TotemRepositoryImpl {
    db: ConnectionPool,
    tx: broadcast::Sender<TotemId>,
}

impl TotemRepositoryImpl {
    pub fn new(db: ConnectionPool) -> Self {
        let (tx, _) = broadcast::channel(32);
        Self { db, tx }
    }

    /// Sender handle shared with the disposal repository, which also moves
    /// totens when a disposal completes.
    pub fn notifier(&self) -> broadcast::Sender<TotemId> {
        self.tx.clone()
    }

    fn notify(&self, totem_id: TotemId) {
        // No subscriber is fine; the feed is best-effort.
        let _ = self.tx.send(totem_id);
    }

    async fn fetch_status(&self, totem_id: TotemId) -> AppResult<Option<String>> {
        sqlx::query_scalar(
            r#"
                SELECT status FROM totens WHERE totem_id = $1
            "#,
        )
        .bind(totem_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}

#[async_trait]
impl TotemRepository for TotemRepositoryImpl {
    async fn create(&self, event: CreateTotem) -> AppResult<TotemId> {
        let totem_id = TotemId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO totens (totem_id, name, status, claimed_by, registered_by)
                VALUES ($1, $2, 'parado', NULL, $3)
            "#,
        )
        .bind(totem_id)
        .bind(&event.name)
        .bind(event.registered_by)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No totem record has been created".into(),
            ));
        }
        self.notify(totem_id);
        Ok(totem_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Totem>> {
        let rows: Vec<TotemRow> = sqlx::query_as(
            r#"
                SELECT totem_id, name, status, claimed_by, registered_by
                FROM totens
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Totem::try_from).collect()
    }

    async fn find_by_status(&self, status: TotemStatus) -> AppResult<Vec<Totem>> {
        let rows: Vec<TotemRow> = sqlx::query_as(
            r#"
                SELECT totem_id, name, status, claimed_by, registered_by
                FROM totens
                WHERE status = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(status.as_ref())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Totem::try_from).collect()
    }

    async fn find_by_id(&self, totem_id: TotemId) -> AppResult<Option<Totem>> {
        let row: Option<TotemRow> = sqlx::query_as(
            r#"
                SELECT totem_id, name, status, claimed_by, registered_by
                FROM totens
                WHERE totem_id = $1
            "#,
        )
        .bind(totem_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Totem::try_from).transpose()
    }

    async fn claim(&self, event: ClaimTotem) -> AppResult<()> {
        // Conditional update: the precondition rides in the WHERE clause so
        // concurrent claims cannot both match. An unconditional overwrite
        // here would let the second claimant silently steal the totem.
        let res = sqlx::query(
            r#"
                UPDATE totens
                SET status = 'aguardo', claimed_by = $2
                WHERE totem_id = $1 AND status = 'iniciado'
            "#,
        )
        .bind(event.totem_id)
        .bind(event.claimed_by)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            // Zero rows: either the totem is gone or someone else holds it.
            return match self.fetch_status(event.totem_id).await? {
                None => Err(AppError::EntityNotFound(format!(
                    "totem ({}) not found",
                    event.totem_id
                ))),
                Some(_) => Err(AppError::AlreadyClaimed(format!(
                    "totem ({}) is not available for a claim",
                    event.totem_id
                ))),
            };
        }
        self.notify(event.totem_id);
        Ok(())
    }

    async fn start(&self, event: StartTotem) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE totens
                SET status = 'iniciado'
                WHERE totem_id = $1 AND status = 'parado'
            "#,
        )
        .bind(event.totem_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return match self.fetch_status(event.totem_id).await? {
                None => Err(AppError::EntityNotFound(format!(
                    "totem ({}) not found",
                    event.totem_id
                ))),
                Some(status) => Err(AppError::InvalidTransition(format!(
                    "totem ({}) cannot start from status {status}",
                    event.totem_id
                ))),
            };
        }
        self.notify(event.totem_id);
        Ok(())
    }

    async fn release(&self, event: ReleaseTotem) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE totens
                SET status = 'iniciado', claimed_by = NULL
                WHERE totem_id = $1 AND status = 'aguardo'
            "#,
        )
        .bind(event.totem_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return match self.fetch_status(event.totem_id).await? {
                None => Err(AppError::EntityNotFound(format!(
                    "totem ({}) not found",
                    event.totem_id
                ))),
                Some(status) => Err(AppError::InvalidTransition(format!(
                    "totem ({}) has no claim to release (status {status})",
                    event.totem_id
                ))),
            };
        }
        self.notify(event.totem_id);
        Ok(())
    }

    async fn delete(&self, event: DeleteTotem) -> AppResult<()> {
        // Absent id is a no-op success; the admin list refresh makes the
        // outcome visible either way.
        sqlx::query(
            r#"
                DELETE FROM totens WHERE totem_id = $1
            "#,
        )
        .bind(event.totem_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        self.notify(event.totem_id);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<TotemId> {
        self.tx.subscribe()
    }
}
