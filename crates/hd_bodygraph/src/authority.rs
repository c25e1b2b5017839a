//! Inner authority.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::center::Center::{Ajna, G, Head, Heart, Sacral, SolarPlexus, Spleen, Throat};
use crate::channel_graph::ChannelGraph;
use crate::error::BodyGraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    EgoManifested,
    GCenter,
    EgoProjected,
    Environmental,
    Lunar,
}

impl Authority {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emotional => "Emotional - Solar Plexus",
            Self::Sacral => "Sacral",
            Self::Splenic => "Splenic",
            Self::EgoManifested => "Ego Manifested",
            Self::GCenter => "G Center",
            Self::EgoProjected => "Ego Projected",
            Self::Environmental => "Environmental",
            Self::Lunar => "Lunar",
        }
    }

    /// First matching rule wins.
    ///
    /// A graph that matches no rule is an internal inconsistency and yields
    /// [`BodyGraphError::UnreachableAuthority`].
    pub fn from_graph(graph: &ChannelGraph) -> Result<Self, BodyGraphError> {
        let active = |c| graph.is_active(c);

        if active(SolarPlexus) {
            Ok(Self::Emotional)
        } else if active(Sacral) {
            Ok(Self::Sacral)
        } else if active(Spleen) {
            Ok(Self::Splenic)
        } else if graph.is_connected(&[Heart, Throat])
            || graph.is_connected(&[Heart, G, Throat])
            || graph.is_connected(&[Heart, Spleen, Throat])
        {
            Ok(Self::EgoManifested)
        } else if graph.is_connected(&[G, Throat]) {
            Ok(Self::GCenter)
        } else if active(G) && active(Heart) {
            Ok(Self::EgoProjected)
        } else if active(Head) || active(Ajna) || active(Throat) {
            Ok(Self::Environmental)
        } else if graph.active_centers().is_empty() {
            Ok(Self::Lunar)
        } else {
            Err(BodyGraphError::UnreachableAuthority)
        }
    }
}

impl Display for Authority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::graph_of;

    fn authority(gates: &[u8]) -> Authority {
        Authority::from_graph(&graph_of(gates)).unwrap()
    }

    #[test]
    fn cascade_order() {
        // Solar plexus beats sacral.
        assert_eq!(authority(&[59, 6, 3, 60]), Authority::Emotional);
        assert_eq!(authority(&[3, 60]), Authority::Sacral);
        assert_eq!(authority(&[18, 58]), Authority::Splenic);
        assert_eq!(authority(&[45, 21]), Authority::EgoManifested);
        assert_eq!(authority(&[31, 7]), Authority::GCenter);
        assert_eq!(authority(&[25, 51]), Authority::EgoProjected);
        assert_eq!(authority(&[64, 47]), Authority::Environmental);
        assert_eq!(authority(&[]), Authority::Lunar);
    }

    #[test]
    fn sacral_beats_spleen() {
        assert_eq!(authority(&[3, 60, 18, 58]), Authority::Sacral);
        assert_eq!(authority(&[50, 27]), Authority::Sacral);
    }

    #[test]
    fn spleen_beats_ego_manifested() {
        // Heart-Spleen-Throat is connected, but the Spleen rule fires first.
        let graph = graph_of(&[26, 44, 16, 48]);
        assert!(graph.is_connected(&[Heart, Spleen, Throat]));
        assert_eq!(Authority::from_graph(&graph).unwrap(), Authority::Splenic);
    }

    #[test]
    fn throat_to_solar_plexus_is_emotional() {
        assert_eq!(authority(&[35, 36]), Authority::Emotional);
    }

    #[test]
    fn ego_manifested_through_g() {
        assert_eq!(authority(&[25, 51, 8, 1]), Authority::EgoManifested);
    }

    #[test]
    fn display_uses_traditional_name() {
        assert_eq!(Authority::Emotional.to_string(), "Emotional - Solar Plexus");
        assert_eq!(Authority::GCenter.to_string(), "G Center");
    }
}
