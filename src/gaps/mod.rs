//! Skill gap analysis and improvement planning

pub mod analyzer;
pub mod catalog;
pub mod plan;
