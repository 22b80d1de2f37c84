pub mod disposal;
pub mod totem;
pub mod user;
