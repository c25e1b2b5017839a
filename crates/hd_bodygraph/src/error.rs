//! Error types for body-graph lookups and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from static-table lookups and classification rules.
///
/// Both variants indicate an incomplete table or a broken internal
/// invariant, never bad user input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BodyGraphError {
    /// A key produced by the engine has no entry in a static table.
    LookupMiss { table: &'static str, key: String },
    /// The authority cascade fell through every rule.
    UnreachableAuthority,
}

impl BodyGraphError {
    pub(crate) fn lookup_miss(table: &'static str, key: impl Display) -> Self {
        Self::LookupMiss {
            table,
            key: key.to_string(),
        }
    }
}

impl Display for BodyGraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LookupMiss { table, key } => write!(f, "no entry for {key} in {table} table"),
            Self::UnreachableAuthority => {
                write!(f, "authority rules exhausted without a match")
            }
        }
    }
}

impl Error for BodyGraphError {}
