//! Analytics module - the derivation passes over a ledger snapshot.
//!
//! Every component here is a deterministic function of the snapshot it is
//! handed: no shared state, no I/O, freshly allocated outputs. Components
//! are independent of each other except for the forecast, which consumes the
//! aggregator's monthly series.

pub mod aggregation;
pub mod flow;
pub mod forecast;
pub mod goal_progress;
pub mod investments;
pub mod patterns;
pub mod streaks;

pub use aggregation::*;
pub use flow::*;
pub use forecast::*;
pub use goal_progress::*;
pub use investments::*;
pub use patterns::*;
pub use streaks::*;
