//! Energy type, strategy and theme.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::center::Center::{self, G, Heart, Root, Sacral, SolarPlexus, Spleen, Throat};
use crate::channel_graph::ChannelGraph;

/// Paths from the Throat to a motor center, tested in order.
pub const MOTOR_PATHS: [&[Center]; 10] = [
    &[Throat, Heart],
    &[Throat, G, Heart],
    &[Throat, Spleen, Heart],
    &[Throat, Sacral],
    &[Throat, G, Sacral],
    &[Throat, Spleen, Sacral],
    &[Throat, Root],
    &[Throat, G, Root],
    &[Throat, Spleen, Root],
    &[Throat, SolarPlexus],
];

/// Whether any of [`MOTOR_PATHS`] is fully connected.
pub fn throat_connected_to_motor(graph: &ChannelGraph) -> bool {
    MOTOR_PATHS.iter().any(|path| graph.is_connected(path))
}

/// The five energy types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnergyType {
    Generator,
    ManifestingGenerator,
    Projector,
    Manifestor,
    Reflector,
}

impl EnergyType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generator => "Generator",
            Self::ManifestingGenerator => "Manifesting Generator",
            Self::Projector => "Projector",
            Self::Manifestor => "Manifestor",
            Self::Reflector => "Reflector",
        }
    }

    pub const fn strategy(self) -> &'static str {
        match self {
            Self::Generator | Self::ManifestingGenerator => "To Respond",
            Self::Projector => "Wait for the Invitation",
            Self::Manifestor => "To Inform",
            Self::Reflector => "Wait a Lunar Cycle",
        }
    }

    /// The not-self theme.
    pub const fn theme(self) -> &'static str {
        match self {
            Self::Generator => "Frustration",
            Self::ManifestingGenerator => "Frustration and Anger",
            Self::Projector => "Bitterness",
            Self::Manifestor => "Anger",
            Self::Reflector => "Disappointment",
        }
    }

    pub const fn all() -> &'static [EnergyType; 5] {
        &[
            Self::Generator,
            Self::ManifestingGenerator,
            Self::Projector,
            Self::Manifestor,
            Self::Reflector,
        ]
    }

    /// Classify an active channel graph.
    pub fn from_graph(graph: &ChannelGraph) -> Self {
        if graph.active_centers().is_empty() {
            return Self::Reflector;
        }
        let sacral = graph.is_active(Sacral);
        let motor = throat_connected_to_motor(graph);
        if sacral && !motor {
            Self::Generator
        } else if sacral {
            Self::ManifestingGenerator
        } else if !motor {
            Self::Projector
        } else {
            Self::Manifestor
        }
    }
}

impl Display for EnergyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::graph_of;

    #[test]
    fn empty_graph_is_reflector() {
        let graph = graph_of(&[]);
        assert_eq!(EnergyType::from_graph(&graph), EnergyType::Reflector);
    }

    #[test]
    fn sacral_without_throat_motor_is_generator() {
        let graph = graph_of(&[3, 60]);
        assert_eq!(EnergyType::from_graph(&graph), EnergyType::Generator);
    }

    #[test]
    fn sacral_to_throat_is_manifesting_generator() {
        let graph = graph_of(&[20, 34]);
        assert_eq!(EnergyType::from_graph(&graph), EnergyType::ManifestingGenerator);
    }

    #[test]
    fn motor_via_g_counts() {
        // Throat-G (31-7) and G-Heart (25-51).
        let graph = graph_of(&[31, 7, 25, 51]);
        assert_eq!(EnergyType::from_graph(&graph), EnergyType::Manifestor);
    }

    #[test]
    fn direct_throat_to_solar_plexus_is_manifestor() {
        let graph = graph_of(&[35, 36]);
        assert!(throat_connected_to_motor(&graph));
        assert_eq!(EnergyType::from_graph(&graph), EnergyType::Manifestor);
    }

    #[test]
    fn motor_via_spleen_counts() {
        // Throat-Spleen (16-48) then Spleen-Root (18-58).
        let graph = graph_of(&[16, 48, 18, 58]);
        assert_eq!(EnergyType::from_graph(&graph), EnergyType::Manifestor);

        // Throat-Spleen (16-48) then Spleen-Heart (26-44).
        let graph = graph_of(&[16, 48, 26, 44]);
        assert_eq!(EnergyType::from_graph(&graph), EnergyType::Manifestor);
    }

    #[test]
    fn two_hops_before_motor_do_not_count() {
        // Throat-G (31-7), G-Spleen (10-57), Spleen-Root (18-58).
        let graph = graph_of(&[31, 7, 10, 57, 18, 58]);
        assert!(graph.is_connected(&[Throat, G, Spleen, Root]));
        assert!(!throat_connected_to_motor(&graph));
        assert_eq!(EnergyType::from_graph(&graph), EnergyType::Projector);
    }

    #[test]
    fn throat_without_motor_is_projector() {
        let graph = graph_of(&[17, 62]);
        assert_eq!(EnergyType::from_graph(&graph), EnergyType::Projector);
    }

    #[test]
    fn strategy_and_theme_are_total() {
        for t in EnergyType::all() {
            assert!(!t.strategy().is_empty());
            assert!(!t.theme().is_empty());
        }
        assert_eq!(EnergyType::Projector.strategy(), "Wait for the Invitation");
        assert_eq!(EnergyType::ManifestingGenerator.theme(), "Frustration and Anger");
    }
}
