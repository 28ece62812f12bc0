// Library crate exposing modules for integration tests and the demo binary

pub mod model;
pub mod viewmodel;
pub mod view;
pub mod input;
pub mod config;
pub mod logging;
pub mod sample;
pub mod cli;
pub mod error;

pub use error::{MenuError, Result};
