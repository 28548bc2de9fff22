//! The login screen, split into state, update, and rendering modules

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

pub use renderer::render_login;
pub use state::LoginState;
