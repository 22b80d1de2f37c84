use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUserProfile, UpdateUserRole},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    /// Explicit Found/NotFound split; a lookup failure is an `Err`, never a
    /// silent default profile.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn update_profile(&self, event: UpdateUserProfile) -> AppResult<()>;
    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()>;
    /// Accumulated points as stored on the profile (authoritative; not
    /// recomputed from disposal records).
    async fn total_points(&self, user_id: UserId) -> AppResult<i32>;
    /// Deleting an absent user is a no-op success.
    async fn delete(&self, event: DeleteUser) -> AppResult<()>;
}
