use crate::model::{
    id::{DisposalId, TotemId, UserId},
    user::DisposalOwner,
};
use chrono::{DateTime, Utc};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

/// A logged disposal. Records are immutable once created except for the
/// approval status.
#[derive(Debug, Clone)]
pub struct Disposal {
    pub disposal_id: DisposalId,
    pub disposed_by: UserId,
    pub totem_id: Option<TotemId>,
    pub points: i32,
    pub disposed_at: DateTime<Utc>,
    pub approval: ApprovalStatus,
}

/// A disposal joined with its resolved owner profile. Records whose owner
/// cannot be resolved never reach this type; the join drops them.
#[derive(Debug, Clone)]
pub struct DisposalWithOwner {
    pub disposal_id: DisposalId,
    pub totem_id: Option<TotemId>,
    pub points: i32,
    pub disposed_at: DateTime<Utc>,
    pub approval: ApprovalStatus,
    pub owner: DisposalOwner,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
pub enum ApprovalStatus {
    #[default]
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "approved")]
    Approved,
    #[strum(serialize = "rejected")]
    Rejected,
}

impl ApprovalStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ApprovalStatus::Pending)
    }

    /// Evaluates an admin transition request. `Ok(Some(next))` means the
    /// store must be updated, `Ok(None)` means the state already matches
    /// (idempotent re-apply). Terminal states never cross over and nothing
    /// returns to `pending`.
    pub fn transition_to(self, next: ApprovalStatus) -> AppResult<Option<ApprovalStatus>> {
        if self == next {
            return Ok(None);
        }
        match (self, next) {
            (ApprovalStatus::Pending, ApprovalStatus::Approved)
            | (ApprovalStatus::Pending, ApprovalStatus::Rejected) => Ok(Some(next)),
            (from, to) => Err(AppError::InvalidTransition(format!(
                "disposal approval cannot move from {from} to {to}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApprovalStatus::*;
    use super::*;

    #[test]
    fn pending_moves_to_either_terminal_state() {
        assert_eq!(Pending.transition_to(Approved).unwrap(), Some(Approved));
        assert_eq!(Pending.transition_to(Rejected).unwrap(), Some(Rejected));
    }

    #[test]
    fn reapplying_a_terminal_state_is_a_noop() {
        assert_eq!(Approved.transition_to(Approved).unwrap(), None);
        assert_eq!(Rejected.transition_to(Rejected).unwrap(), None);
    }

    #[test]
    fn terminal_states_never_cross() {
        assert!(matches!(
            Approved.transition_to(Rejected),
            Err(AppError::InvalidTransition(_))
        ));
        assert!(matches!(
            Rejected.transition_to(Approved),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn nothing_returns_to_pending() {
        assert!(Approved.transition_to(Pending).is_err());
        assert!(Rejected.transition_to(Pending).is_err());
        // pending -> pending is the idempotent case, not a transition
        assert_eq!(Pending.transition_to(Pending).unwrap(), None);
    }
}
