pub mod auth;
pub mod disposal;
pub mod health;
pub mod totem;
pub mod user;
pub mod v1;
