use crate::model::{
    disposal::{
        event::{CreateDisposal, UpdateApproval},
        Disposal, DisposalWithOwner,
    },
    id::{DisposalId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait DisposalRepository: Send + Sync {
    /// Completion of a claimed totem: inserts the record, credits the
    /// owner's points and releases the totem, all in one transaction.
    async fn create(&self, event: CreateDisposal) -> AppResult<DisposalId>;
    /// A user's own records, newest first.
    async fn find_by_owner(&self, user_id: UserId) -> AppResult<Vec<Disposal>>;
    /// Admin approval list: every record joined with its resolved owner in
    /// a single query. Records with unresolvable owners are dropped.
    async fn find_all_with_owners(&self) -> AppResult<Vec<DisposalWithOwner>>;
    async fn update_approval(&self, event: UpdateApproval) -> AppResult<()>;
}
