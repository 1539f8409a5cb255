//! Flow module - transfer flow graph inferred from description conventions.

mod flow_model;
mod flow_parser;
mod flow_service;

pub use flow_model::{FlowGraph, FlowLink, FlowNode};
pub use flow_parser::{DashDelimitedParser, TransferParser, TransferRoute};
pub use flow_service::FlowGraphService;

#[cfg(test)]
mod flow_service_tests;
