pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod ui;

pub use error::{Error, Result};
