//! Unit tests for the flow graph service.

use super::*;
use crate::transactions::{Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn create_test_transfer(id: &str, description: &str, amount: Decimal) -> Transaction {
    Transaction {
        id: id.to_string(),
        description: description.to_string(),
        amount,
        transaction_type: TransactionType::Expense,
        category_id: "Transfers".to_string(),
        tags: Vec::new(),
        goal_id: None,
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        is_recurring: false,
        recurrence: None,
    }
}

#[test]
fn test_builds_nodes_and_links_from_well_formed_transfers() {
    let transactions = vec![
        create_test_transfer("t-1", "Transfer - Checking - Savings", dec!(500)),
        create_test_transfer("t-2", "Transfer - Savings - Brokerage", dec!(200)),
    ];

    let graph = FlowGraphService::default().build(&transactions);

    let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Checking", "Savings", "Brokerage"]);

    assert_eq!(
        graph.links,
        vec![
            FlowLink {
                source: "Checking".to_string(),
                target: "Savings".to_string(),
                value: dec!(500),
            },
            FlowLink {
                source: "Savings".to_string(),
                target: "Brokerage".to_string(),
                value: dec!(200),
            },
        ]
    );
}

#[test]
fn test_nodes_are_deduplicated_in_first_seen_order() {
    let transactions = vec![
        create_test_transfer("t-1", "Transfer - Checking - Savings", dec!(100)),
        create_test_transfer("t-2", "Transfer - Checking - Savings", dec!(150)),
        create_test_transfer("t-3", "Transfer - Savings - Checking", dec!(50)),
    ];

    let graph = FlowGraphService::default().build(&transactions);

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.links.len(), 3);
}

#[test]
fn test_malformed_descriptions_are_skipped_not_fatal() {
    let transactions = vec![
        create_test_transfer("t-1", "just a note", dec!(100)),
        create_test_transfer("t-2", "Transfer - Checking", dec!(100)),
        create_test_transfer("t-3", "Transfer - Checking - Savings", dec!(75)),
    ];

    let graph = FlowGraphService::default().build(&transactions);

    // The two malformed records contribute nothing; the batch survives.
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.links[0].value, dec!(75));
}

#[test]
fn test_other_categories_are_ignored() {
    let mut groceries = create_test_transfer("t-1", "Transfer - Checking - Savings", dec!(30));
    groceries.category_id = "cat-food".to_string();

    let graph = FlowGraphService::default().build(&[groceries]);

    assert!(graph.is_empty());
}

#[test]
fn test_custom_transfer_category() {
    let mut transfer = create_test_transfer("t-1", "Transfer - Checking - Savings", dec!(30));
    transfer.category_id = "cat-moves".to_string();

    let graph = FlowGraphService::new("cat-moves").build(&[transfer]);

    assert_eq!(graph.links.len(), 1);
}

#[test]
fn test_custom_parser_can_replace_the_convention() {
    struct ArrowParser;

    impl TransferParser for ArrowParser {
        fn parse<'a>(&self, description: &'a str) -> Option<TransferRoute<'a>> {
            let (source, target) = description.split_once(" -> ")?;
            if source.is_empty() || target.is_empty() {
                return None;
            }
            Some(TransferRoute { source, target })
        }
    }

    let transactions = vec![create_test_transfer("t-1", "Checking -> Savings", dec!(10))];

    let graph =
        FlowGraphService::with_parser("Transfers", Box::new(ArrowParser)).build(&transactions);

    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.links[0].source, "Checking");
    assert_eq!(graph.links[0].target, "Savings");
}

#[test]
fn test_empty_input_yields_empty_graph() {
    let graph = FlowGraphService::default().build(&[]);
    assert!(graph.is_empty());
}
