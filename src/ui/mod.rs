mod app;
pub mod login;
pub mod splash;

pub use app::{App, run};
