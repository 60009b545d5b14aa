pub mod cli;
pub mod command;
pub mod error;
pub mod fetch;
pub mod http;
pub mod params;
pub mod profile;
pub mod utils;

pub use error::{Error, Result};
