//! Aggregation module - time-bucket and category sums, splits, and ratios.

mod aggregation_model;
mod aggregation_service;

pub use aggregation_model::*;
pub use aggregation_service::*;
