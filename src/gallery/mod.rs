//! Gallery search pipeline
//!
//! Plans one upstream Alchemy query per submission and normalizes the
//! mode-specific response shapes into a single NFT record.

pub mod client;
pub mod normalizer;
pub mod planner;
pub mod types;

pub use client::AlchemyGalleryClient;
pub use normalizer::normalize;
pub use planner::plan_query;
pub use types::*;
