use crate::model::{
    id::TotemId,
    totem::{
        event::{ClaimTotem, CreateTotem, DeleteTotem, ReleaseTotem, StartTotem},
        Totem, TotemStatus,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;
use tokio::sync::broadcast;

#[async_trait]
pub trait TotemRepository: Send + Sync {
    async fn create(&self, event: CreateTotem) -> AppResult<TotemId>;
    async fn find_all(&self) -> AppResult<Vec<Totem>>;
    async fn find_by_status(&self, status: TotemStatus) -> AppResult<Vec<Totem>>;
    async fn find_by_id(&self, totem_id: TotemId) -> AppResult<Option<Totem>>;
    /// Atomic `iniciado -> aguardo` transition recording the claimant.
    /// Exactly one of any set of concurrent claims succeeds; the others
    /// fail with `AlreadyClaimed`.
    async fn claim(&self, event: ClaimTotem) -> AppResult<()>;
    /// `parado -> iniciado`.
    async fn start(&self, event: StartTotem) -> AppResult<()>;
    /// `aguardo -> iniciado`, clearing the claimant.
    async fn release(&self, event: ReleaseTotem) -> AppResult<()>;
    /// Deleting an absent totem is a no-op success.
    async fn delete(&self, event: DeleteTotem) -> AppResult<()>;
    /// Change feed: fires after every mutating call. Subscribers re-query
    /// the filtered set, so each notification yields a replacing snapshot.
    fn subscribe(&self) -> broadcast::Receiver<TotemId>;
}
