use garde::Validate;
use kernel::model::{id::UserId, role::Role, user::User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Usuario,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::Usuario => Self::Usuario,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::Usuario => Self::Usuario,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(value: Vec<User>) -> Self {
        Self {
            items: value.into_iter().map(UserResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub age: Option<i32>,
    pub role: RoleName,
    pub points: i32,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            age,
            role,
            points,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            age,
            role: RoleName::from(role),
            points,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfileRequest {
    #[garde(length(min = 1))]
    pub user_name: String,
    #[garde(inner(range(min = 0)))]
    pub age: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPointsResponse {
    pub user_id: UserId,
    pub total: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_name_round_trips() {
        assert!(matches!(RoleName::from(Role::Admin), RoleName::Admin));
        assert_eq!(Role::from(RoleName::Usuario), Role::Usuario);
        assert_eq!(Role::from(RoleName::from(Role::Admin)), Role::Admin);
    }

    #[test]
    fn role_name_serializes_with_original_wire_values() {
        assert_eq!(serde_json::to_string(&RoleName::Admin).unwrap(), r#""admin""#);
        assert_eq!(
            serde_json::to_string(&RoleName::Usuario).unwrap(),
            r#""usuario""#
        );
    }

    #[test]
    fn empty_profile_name_fails_validation() {
        let req = UpdateUserProfileRequest {
            user_name: "".into(),
            age: None,
        };
        assert!(req.validate().is_err());
    }
}
