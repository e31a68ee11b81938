//! Output module
//! Report structures and their console, JSON, and markdown formatters

pub mod formatter;
pub mod report;
