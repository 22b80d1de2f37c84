use garde::Validate;
use kernel::model::{id::UserId, user::event::CreateUser};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 6))]
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub user_id: UserId,
    pub access_token: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[garde(length(min = 1))]
    pub user_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(inner(range(min = 0)))]
    pub age: Option<i32>,
    #[garde(length(min = 6))]
    pub password: String,
    #[garde(length(min = 6))]
    pub confirm_password: String,
}

impl TryFrom<RegisterRequest> for CreateUser {
    type Error = AppError;

    // The mismatch check lives in the conversion, so it always runs before
    // any repository call.
    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        if value.password != value.confirm_password {
            return Err(AppError::UnprocessableEntity(
                "password confirmation does not match".into(),
            ));
        }
        let RegisterRequest {
            user_name,
            email,
            age,
            password,
            ..
        } = value;
        Ok(CreateUser {
            user_name,
            email,
            password,
            age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            user_name: "Maria".into(),
            email: "maria@example.com".into(),
            age: Some(27),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn mismatched_confirmation_is_rejected_before_any_store_access() {
        let res = CreateUser::try_from(request("senha123", "senha124"));
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn matching_confirmation_converts() {
        let user = CreateUser::try_from(request("senha123", "senha123")).unwrap();
        assert_eq!(user.user_name, "Maria");
        assert_eq!(user.age, Some(27));
    }

    #[test]
    fn short_password_fails_validation() {
        let req = request("abc", "abc");
        assert!(req.validate().is_err());
    }

    #[test]
    fn invalid_email_fails_validation() {
        let mut req = request("senha123", "senha123");
        req.email = "not-an-email".into();
        assert!(req.validate().is_err());
    }
}
