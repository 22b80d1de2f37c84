use async_trait::async_trait;
use chrono::Utc;
use kernel::model::{
    disposal::{
        event::{CreateDisposal, UpdateApproval},
        ApprovalStatus, Disposal, DisposalWithOwner,
    },
    id::{DisposalId, TotemId, UserId},
    totem::TotemStatus,
};
use kernel::repository::disposal::DisposalRepository;
use shared::error::{AppError, AppResult};
use tokio::sync::broadcast;

use crate::database::{
    model::disposal::{DisposalRow, DisposalWithOwnerRow},
    ConnectionPool,
};

pub struct DisposalRepositoryImpl {
    db: ConnectionPool,
    totem_notifier: broadcast::Sender<TotemId>,
}

impl DisposalRepositoryImpl {
    pub fn new(db: ConnectionPool, totem_notifier: broadcast::Sender<TotemId>) -> Self {
        Self { db, totem_notifier }
    }

    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ClaimedTotemRow {
    status: String,
    claimed_by: Option<UserId>,
}

#[async_trait]
impl DisposalRepository for DisposalRepositoryImpl {
    async fn create(&self, event: CreateDisposal) -> AppResult<DisposalId> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        // Preconditions, checked inside the transaction:
        // - the totem exists
        // - it is awaiting completion (`aguardo`)
        // - the claimant on record is the completing user
        {
            let row: Option<ClaimedTotemRow> = sqlx::query_as(
                r#"
                    SELECT status, claimed_by
                    FROM totens
                    WHERE totem_id = $1
                    FOR UPDATE
                "#,
            )
            .bind(event.totem_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let Some(row) = row else {
                return Err(AppError::EntityNotFound(format!(
                    "totem ({}) not found",
                    event.totem_id
                )));
            };
            if row.status != TotemStatus::Aguardo.as_ref() {
                return Err(AppError::InvalidTransition(format!(
                    "totem ({}) has no disposal in progress",
                    event.totem_id
                )));
            }
            if row.claimed_by != Some(event.disposed_by) {
                return Err(AppError::UnprocessableEntity(format!(
                    "totem ({}) is claimed by another user",
                    event.totem_id
                )));
            }
        }

        let disposal_id = DisposalId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO descartes
                (disposal_id, disposed_by, totem_id, points, disposed_at, approval)
                VALUES ($1, $2, $3, $4, $5, 'pending')
            "#,
        )
        .bind(disposal_id)
        .bind(event.disposed_by)
        .bind(event.totem_id)
        .bind(event.points)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No disposal record has been created".into(),
            ));
        }

        // Points live on the profile; the record insert and the credit
        // succeed or fail together.
        let res = sqlx::query(
            r#"
                UPDATE usuarios
                SET pontos = pontos + $2
                WHERE user_id = $1
            "#,
        )
        .bind(event.disposed_by)
        .bind(event.points)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "disposal owner not found".into(),
            ));
        }

        // Completion reopens the totem for the next claimant.
        sqlx::query(
            r#"
                UPDATE totens
                SET status = 'iniciado', claimed_by = NULL
                WHERE totem_id = $1
            "#,
        )
        .bind(event.totem_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        let _ = self.totem_notifier.send(event.totem_id);
        Ok(disposal_id)
    }

    async fn find_by_owner(&self, user_id: UserId) -> AppResult<Vec<Disposal>> {
        let rows: Vec<DisposalRow> = sqlx::query_as(
            r#"
                SELECT disposal_id, disposed_by, totem_id, points, disposed_at, approval
                FROM descartes
                WHERE disposed_by = $1
                ORDER BY disposed_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Disposal::try_from).collect()
    }

    async fn find_all_with_owners(&self) -> AppResult<Vec<DisposalWithOwner>> {
        // One joined query instead of a lookup per record. The INNER JOIN
        // also enforces the invariant that listed records always carry a
        // resolvable owner.
        let rows: Vec<DisposalWithOwnerRow> = sqlx::query_as(
            r#"
                SELECT
                    d.disposal_id,
                    d.totem_id,
                    d.points,
                    d.disposed_at,
                    d.approval,
                    u.user_id,
                    u.user_name,
                    u.email
                FROM descartes AS d
                INNER JOIN usuarios AS u ON d.disposed_by = u.user_id
                ORDER BY d.disposed_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(DisposalWithOwner::try_from).collect()
    }

    async fn update_approval(&self, event: UpdateApproval) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let current: Option<String> = sqlx::query_scalar(
            r#"
                SELECT approval FROM descartes WHERE disposal_id = $1 FOR UPDATE
            "#,
        )
        .bind(event.disposal_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(current) = current else {
            return Err(AppError::EntityNotFound(format!(
                "disposal ({}) not found",
                event.disposal_id
            )));
        };
        let current = current
            .parse::<ApprovalStatus>()
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;

        // `None` means the requested state already holds; commit nothing.
        if let Some(next) = current.transition_to(event.next)? {
            let res = sqlx::query(
                r#"
                    UPDATE descartes SET approval = $2 WHERE disposal_id = $1
                "#,
            )
            .bind(event.disposal_id)
            .bind(next.as_ref())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if res.rows_affected() < 1 {
                return Err(AppError::NoRowsAffectedError(
                    "No disposal record has been updated".into(),
                ));
            }
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }
}
