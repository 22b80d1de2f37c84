use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::{
    database::ConnectionPool,
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};

pub struct AuthorizationKey(String);

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        self.0.clone()
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(value: &AccessToken) -> Self {
        Self(value.0.clone())
    }
}

impl From<AccessToken> for AuthorizationKey {
    fn from(value: AccessToken) -> Self {
        Self(value.0)
    }
}

pub struct AuthorizedUserId(UserId);

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(value.parse()?))
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    user_id: UserId,
    password_hash: String,
}

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv.get(&key).await.map(|v| v.map(|id| id.0))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<CredentialRow> = sqlx::query_as(
            r#"
                SELECT user_id, password_hash
                FROM usuarios
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // An unknown email and a wrong password are indistinguishable to
        // the caller.
        let Some(row) = row else {
            return Err(AppError::InvalidCredentials);
        };
        let valid = bcrypt::verify(password, &row.password_hash)?;
        if !valid {
            return Err(AppError::InvalidCredentials);
        }
        Ok(row.user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let access_token = AccessToken(Uuid::new_v4().simple().to_string());
        let key: AuthorizationKey = (&access_token).into();
        self.kv
            .set_ex(&key, &AuthorizedUserId(event.user_id), self.ttl)
            .await?;
        Ok(access_token)
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = access_token.into();
        self.kv.delete(&key).await
    }
}
