//! Transfer flow graph construction.

use log::{debug, warn};

use crate::constants::DEFAULT_TRANSFER_CATEGORY;
use crate::transactions::Transaction;

use super::flow_model::{FlowGraph, FlowLink, FlowNode};
use super::flow_parser::{DashDelimitedParser, TransferParser};

use std::collections::HashSet;

/// Builds the directed weighted transfer graph from the transactions in the
/// configured transfer category.
pub struct FlowGraphService {
    transfer_category: String,
    parser: Box<dyn TransferParser>,
}

impl Default for FlowGraphService {
    fn default() -> Self {
        FlowGraphService::new(DEFAULT_TRANSFER_CATEGORY)
    }
}

impl FlowGraphService {
    /// Service for the given transfer category, using the default
    /// `<label> - <source> - <target>` description convention.
    pub fn new(transfer_category: impl Into<String>) -> Self {
        FlowGraphService {
            transfer_category: transfer_category.into(),
            parser: Box::new(DashDelimitedParser),
        }
    }

    /// Service with a custom description parser.
    pub fn with_parser(
        transfer_category: impl Into<String>,
        parser: Box<dyn TransferParser>,
    ) -> Self {
        FlowGraphService {
            transfer_category: transfer_category.into(),
            parser,
        }
    }

    /// Derives the flow graph. A transfer whose description does not parse
    /// is skipped; it never fails the batch.
    pub fn build(&self, transactions: &[Transaction]) -> FlowGraph {
        debug!("Building transfer flow graph...");

        let mut seen: HashSet<String> = HashSet::new();
        let mut graph = FlowGraph::default();

        for transaction in transactions
            .iter()
            .filter(|t| t.category_id == self.transfer_category)
        {
            let route = match self.parser.parse(&transaction.description) {
                Some(route) => route,
                None => {
                    warn!(
                        "Skipping transfer '{}': description does not name both endpoints",
                        transaction.id
                    );
                    continue;
                }
            };

            for name in [route.source, route.target] {
                if seen.insert(name.to_string()) {
                    graph.nodes.push(FlowNode {
                        name: name.to_string(),
                    });
                }
            }
            graph.links.push(FlowLink {
                source: route.source.to_string(),
                target: route.target.to_string(),
                value: transaction.amount,
            });
        }

        graph
    }
}
