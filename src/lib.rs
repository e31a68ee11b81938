//! Job fit analysis library

pub mod cli;
pub mod config;
pub mod error;
pub mod gaps;
pub mod input;
pub mod matching;
pub mod output;
pub mod processing;
pub mod profile;

pub use error::{JobFitError, Result};
pub use config::Config;
