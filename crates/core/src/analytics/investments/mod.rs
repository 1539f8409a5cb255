//! Investments module - asset-class performance inside the investment
//! category.

mod investments_model;
mod investments_service;

pub use investments_model::AssetClassReport;
pub use investments_service::InvestmentService;
