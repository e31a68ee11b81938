//! Text processing and analysis module

pub mod ats;
pub mod similarity;
pub mod skill_extractor;
pub mod text_processor;
