//! Definition (split) names.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::channel_graph::ChannelGraph;
use crate::error::BodyGraphError;

/// Split values reachable on a nine-center graph.
pub const SPLIT_RANGE: std::ops::RangeInclusive<i32> = -8..=4;

fn definition_name(split: i32) -> Option<&'static str> {
    let name = match split {
        4 => "Quadruple Split Definition",
        3 => "Triple Split Definition",
        2 => "Split Definition",
        1 => "Single Definition",
        0 => "No Definition",
        -1 => "Bicircular Definition",
        -2 => "Tricircular Definition",
        -8..=-3 => "Multicircular Definition",
        _ => return None,
    };
    Some(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Definition {
    /// `|active centers| - |distinct center pairs|`.
    pub split: i32,
    pub name: &'static str,
}

impl Definition {
    pub fn from_split(split: i32) -> Result<Self, BodyGraphError> {
        let name =
            definition_name(split).ok_or_else(|| BodyGraphError::lookup_miss("definition", split))?;
        Ok(Self { split, name })
    }

    pub fn from_graph(graph: &ChannelGraph) -> Result<Self, BodyGraphError> {
        Self::from_split(graph.split_value())
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::graph_of;

    #[test]
    fn whole_range_is_named() {
        for split in SPLIT_RANGE {
            assert!(Definition::from_split(split).is_ok(), "{split}");
        }
        assert!(Definition::from_split(5).is_err());
        assert!(Definition::from_split(-9).is_err());
    }

    #[test]
    fn from_graph() {
        assert_eq!(Definition::from_graph(&graph_of(&[])).unwrap().name, "No Definition");
        assert_eq!(
            Definition::from_graph(&graph_of(&[3, 60])).unwrap().name,
            "Single Definition"
        );
        // Sacral-Root and Throat-Heart: two separate pairs.
        let def = Definition::from_graph(&graph_of(&[3, 60, 45, 21])).unwrap();
        assert_eq!(def.split, 2);
        assert_eq!(def.name, "Split Definition");
    }

    #[test]
    fn triangle_scores_zero() {
        // Throat-G, G-Sacral, Sacral-Throat close a loop.
        let def = Definition::from_graph(&graph_of(&[31, 7, 2, 14, 20, 34])).unwrap();
        assert_eq!(def.split, 0);
    }
}
