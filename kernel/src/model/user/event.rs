use crate::model::{id::UserId, role::Role};

pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub age: Option<i32>,
}

#[derive(Debug)]
pub struct UpdateUserProfile {
    pub user_id: UserId,
    pub user_name: String,
    pub age: Option<i32>,
}

#[derive(Debug)]
pub struct UpdateUserRole {
    pub user_id: UserId,
    pub role: Role,
}

#[derive(Debug)]
pub struct DeleteUser {
    pub user_id: UserId,
}
