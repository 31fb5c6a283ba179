#![forbid(unsafe_code)]

//! Command-line front end for `sift-text` and `sift-list`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod measure;
pub mod sessions;
pub mod truncate;

pub use cli::{Cli, Commands, dispatch, run};
pub use error::{Result, SiftError};
