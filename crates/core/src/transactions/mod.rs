//! Transactions module - domain models for dated financial records.

mod transactions_model;


pub use transactions_model::{Recurrence, RecurrenceInterval, Transaction, TransactionType};
