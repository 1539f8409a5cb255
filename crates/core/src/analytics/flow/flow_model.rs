//! Transfer flow graph domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named endpoint in the transfer flow graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub name: String,
}

/// A directed, weighted money movement between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowLink {
    pub source: String,
    pub target: String,
    pub value: Decimal,
}

/// Directed weighted graph of money transfers inferred from transfer
/// transaction descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowGraph {
    /// Endpoint names, deduplicated, in first-seen order.
    pub nodes: Vec<FlowNode>,
    /// One link per parsed transfer, in input order.
    pub links: Vec<FlowLink>,
}

impl FlowGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}
