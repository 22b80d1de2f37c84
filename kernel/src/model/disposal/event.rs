use crate::model::{
    disposal::ApprovalStatus,
    id::{DisposalId, TotemId, UserId},
};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateDisposal {
    pub disposed_by: UserId,
    pub totem_id: TotemId,
    pub points: i32,
}

#[derive(Debug, new)]
pub struct UpdateApproval {
    pub disposal_id: DisposalId,
    pub next: ApprovalStatus,
}
