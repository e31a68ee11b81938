//! Input processing module
//! Handles file detection and profile loading

pub mod file_detector;
pub mod loader;
