pub mod event;

/// Opaque bearer token handed to the client on login.
pub struct AccessToken(pub String);
