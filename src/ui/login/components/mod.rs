//! The individual panels of the login screen

pub mod footer;
pub mod form;
pub mod header;
pub mod logs;
