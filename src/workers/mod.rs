pub mod authenticator;
pub mod core;
