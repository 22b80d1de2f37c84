use crate::model::{id::UserId, role::Role};
pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub age: Option<i32>,
    pub role: Role,
    pub points: i32,
}

/// Owner data merged into admin-facing disposal listings.
#[derive(Debug, Clone)]
pub struct DisposalOwner {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}
