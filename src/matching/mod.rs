//! Resume-to-job match scoring and ranking

pub mod attributes;
pub mod ranker;
pub mod scorer;
