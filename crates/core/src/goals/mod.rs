//! Goals module - savings goal models.

mod goals_model;


pub use goals_model::Goal;
