//! Transfer description parsing.
//!
//! Transfer endpoints ride inside free-text descriptions under an upstream
//! formatting convention. The convention is isolated behind a trait so it
//! can be swapped without touching graph building.

use crate::constants::TRANSFER_DESCRIPTION_DELIMITER;

/// Source and target endpoints extracted from one transfer description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRoute<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

/// Extracts the endpoints of a transfer from its description, or `None`
/// when the description does not follow the expected convention. Parsers
/// must fail soft: a malformed description is a skipped record, never an
/// error.
pub trait TransferParser: Send + Sync {
    fn parse<'a>(&self, description: &'a str) -> Option<TransferRoute<'a>>;
}

/// Parses the `<label> - <source> - <target>` convention: the description is
/// split on the literal `" - "` and the second and third tokens are the
/// endpoints. Both must be present and non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashDelimitedParser;

impl TransferParser for DashDelimitedParser {
    fn parse<'a>(&self, description: &'a str) -> Option<TransferRoute<'a>> {
        let mut parts = description.split(TRANSFER_DESCRIPTION_DELIMITER);
        let _label = parts.next()?;
        let source = parts.next()?;
        let target = parts.next()?;
        if source.is_empty() || target.is_empty() {
            return None;
        }
        Some(TransferRoute { source, target })
    }
}
