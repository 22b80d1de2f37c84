use chrono::{DateTime, Utc};
use kernel::model::{
    disposal::{ApprovalStatus, Disposal, DisposalWithOwner},
    id::{DisposalId, TotemId, UserId},
    user::DisposalOwner,
};
use shared::error::AppError;

fn parse_approval(raw: &str) -> Result<ApprovalStatus, AppError> {
    raw.parse::<ApprovalStatus>()
        .map_err(|e| AppError::ConversionEntityError(e.to_string()))
}

#[derive(sqlx::FromRow)]
pub struct DisposalRow {
    pub disposal_id: DisposalId,
    pub disposed_by: UserId,
    pub totem_id: Option<TotemId>,
    pub points: i32,
    pub disposed_at: DateTime<Utc>,
    pub approval: String,
}

impl TryFrom<DisposalRow> for Disposal {
    type Error = AppError;

    fn try_from(value: DisposalRow) -> Result<Self, Self::Error> {
        let DisposalRow {
            disposal_id,
            disposed_by,
            totem_id,
            points,
            disposed_at,
            approval,
        } = value;
        Ok(Disposal {
            disposal_id,
            disposed_by,
            totem_id,
            points,
            disposed_at,
            approval: parse_approval(&approval)?,
        })
    }
}

/// Row shape for the admin approval list: one record joined with its
/// resolved owner.
#[derive(sqlx::FromRow)]
pub struct DisposalWithOwnerRow {
    pub disposal_id: DisposalId,
    pub totem_id: Option<TotemId>,
    pub points: i32,
    pub disposed_at: DateTime<Utc>,
    pub approval: String,
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

impl TryFrom<DisposalWithOwnerRow> for DisposalWithOwner {
    type Error = AppError;

    fn try_from(value: DisposalWithOwnerRow) -> Result<Self, Self::Error> {
        let DisposalWithOwnerRow {
            disposal_id,
            totem_id,
            points,
            disposed_at,
            approval,
            user_id,
            user_name,
            email,
        } = value;
        Ok(DisposalWithOwner {
            disposal_id,
            totem_id,
            points,
            disposed_at,
            approval: parse_approval(&approval)?,
            owner: DisposalOwner {
                user_id,
                user_name,
                email,
            },
        })
    }
}
