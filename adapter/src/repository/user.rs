use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUserProfile, UpdateUserRole},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let res = sqlx::query(
            r#"
                INSERT INTO usuarios (user_id, user_name, email, password_hash, age, role, pontos)
                VALUES ($1, $2, $3, $4, $5, 'usuario', 0)
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(event.age)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }
        Ok(user_id)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, age, role, pontos
                FROM usuarios
                ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, age, role, pontos
                FROM usuarios
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn update_profile(&self, event: UpdateUserProfile) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE usuarios
                SET user_name = $2, age = $3
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(&event.user_name)
        .bind(event.age)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified user not found".into(),
            ));
        }
        Ok(())
    }

    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE usuarios
                SET role = $2
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(event.role.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified user not found".into(),
            ));
        }
        Ok(())
    }

    async fn total_points(&self, user_id: UserId) -> AppResult<i32> {
        let pontos: Option<i32> = sqlx::query_scalar(
            r#"
                SELECT pontos FROM usuarios WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        pontos.ok_or_else(|| AppError::EntityNotFound("specified user not found".into()))
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        // Deleting an already-absent user is treated as success.
        sqlx::query(
            r#"
                DELETE FROM usuarios WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }
}
