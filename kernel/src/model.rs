pub mod auth;
pub mod disposal;
pub mod id;
pub mod role;
pub mod totem;
pub mod user;
