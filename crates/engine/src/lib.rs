//! Recommendation engine for the ReelGraph recommender.
//!
//! This crate wires the graph source and the scoring pipeline into a single
//! `recommend(seed)` call.

pub mod error;
pub mod recommender;

pub use error::{RecommendError, Result};
pub use recommender::{Recommendation, RecommendationEngine, DEFAULT_TOP_N};
