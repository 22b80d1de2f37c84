use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    disposal::{ApprovalStatus, Disposal, DisposalWithOwner},
    id::{DisposalId, TotemId, UserId},
    user::DisposalOwner,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatusName {
    Pending,
    Approved,
    Rejected,
}

impl From<ApprovalStatus> for ApprovalStatusName {
    fn from(value: ApprovalStatus) -> Self {
        match value {
            ApprovalStatus::Pending => Self::Pending,
            ApprovalStatus::Approved => Self::Approved,
            ApprovalStatus::Rejected => Self::Rejected,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDisposalRequest {
    #[garde(skip)]
    pub totem_id: TotemId,
    #[garde(range(min = 1))]
    pub points: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalsResponse {
    pub items: Vec<DisposalResponse>,
}

impl From<Vec<Disposal>> for DisposalsResponse {
    fn from(value: Vec<Disposal>) -> Self {
        Self {
            items: value.into_iter().map(DisposalResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalResponse {
    pub disposal_id: DisposalId,
    pub totem_id: Option<TotemId>,
    pub points: i32,
    pub disposed_at: DateTime<Utc>,
    pub approval: ApprovalStatusName,
}

impl From<Disposal> for DisposalResponse {
    fn from(value: Disposal) -> Self {
        let Disposal {
            disposal_id,
            totem_id,
            points,
            disposed_at,
            approval,
            ..
        } = value;
        Self {
            disposal_id,
            totem_id,
            points,
            disposed_at,
            approval: ApprovalStatusName::from(approval),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalsWithOwnersResponse {
    pub items: Vec<DisposalWithOwnerResponse>,
}

impl From<Vec<DisposalWithOwner>> for DisposalsWithOwnersResponse {
    fn from(value: Vec<DisposalWithOwner>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(DisposalWithOwnerResponse::from)
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalWithOwnerResponse {
    pub disposal_id: DisposalId,
    pub totem_id: Option<TotemId>,
    pub points: i32,
    pub disposed_at: DateTime<Utc>,
    pub approval: ApprovalStatusName,
    pub owner: DisposalOwnerResponse,
}

impl From<DisposalWithOwner> for DisposalWithOwnerResponse {
    fn from(value: DisposalWithOwner) -> Self {
        let DisposalWithOwner {
            disposal_id,
            totem_id,
            points,
            disposed_at,
            approval,
            owner,
        } = value;
        Self {
            disposal_id,
            totem_id,
            points,
            disposed_at,
            approval: ApprovalStatusName::from(approval),
            owner: owner.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalOwnerResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

impl From<DisposalOwner> for DisposalOwnerResponse {
    fn from(value: DisposalOwner) -> Self {
        let DisposalOwner {
            user_id,
            user_name,
            email,
        } = value;
        Self {
            user_id,
            user_name,
            email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_points_fail_validation() {
        let req = CreateDisposalRequest {
            totem_id: TotemId::new(),
            points: 0,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn enriched_records_always_carry_owner_fields() {
        let record = DisposalWithOwner {
            disposal_id: DisposalId::new(),
            totem_id: Some(TotemId::new()),
            points: 10,
            disposed_at: Utc::now(),
            approval: ApprovalStatus::Pending,
            owner: DisposalOwner {
                user_id: UserId::new(),
                user_name: "João".into(),
                email: "joao@example.com".into(),
            },
        };
        let res = DisposalWithOwnerResponse::from(record);
        assert_eq!(res.owner.user_name, "João");
        assert_eq!(res.owner.email, "joao@example.com");
    }
}
