//! The 36 channels of the body graph and the gate indices built from them.
//!
//! Every gate belongs to exactly one center. A channel joins two gates in
//! two different centers. Gates 10, 20, 34 and 57 sit on three channels
//! each; every other gate sits on exactly one.

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use serde::Serialize;

use crate::center::Center;
use crate::error::BodyGraphError;

/// A fixed pair of gates joining two centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Channel {
    /// The two gates, in canonical table order.
    pub gates: [u8; 2],
    /// Center of `gates[0]` and of `gates[1]`.
    pub centers: [Center; 2],
    /// Traditional channel name.
    pub name: &'static str,
}

impl Channel {
    const fn new(a: u8, b: u8, ca: Center, cb: Center, name: &'static str) -> Self {
        Self {
            gates: [a, b],
            centers: [ca, cb],
            name,
        }
    }

    /// The other gate of the channel, if `gate` is on it.
    pub fn partner_of(&self, gate: u8) -> Option<u8> {
        match self.gates {
            [a, b] if a == gate => Some(b),
            [a, b] if b == gate => Some(a),
            _ => None,
        }
    }

    /// Gates as an ordered `(low, high)` pair, for deduplication.
    pub fn key(&self) -> (u8, u8) {
        let [a, b] = self.gates;
        (a.min(b), a.max(b))
    }
}

impl Display for Channel {
    /// Zero-padded gate code, e.g. `0360` for the 3–60 channel.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}", self.gates[0], self.gates[1])
    }
}

use crate::center::Center::{Ajna, G, Head, Heart, Root, Sacral, SolarPlexus, Spleen, Throat};

/// All 36 channels.
pub static CHANNELS: [Channel; 36] = [
    Channel::new(64, 47, Head, Ajna, "Abstraction"),
    Channel::new(61, 24, Head, Ajna, "Awareness"),
    Channel::new(63, 4, Head, Ajna, "Logic"),
    Channel::new(17, 62, Ajna, Throat, "Acceptance"),
    Channel::new(43, 23, Ajna, Throat, "Structuring"),
    Channel::new(11, 56, Ajna, Throat, "Curiosity"),
    Channel::new(16, 48, Throat, Spleen, "The Wavelength"),
    Channel::new(20, 57, Throat, Spleen, "The Brain Wave"),
    Channel::new(20, 10, Throat, G, "Awakening"),
    Channel::new(20, 34, Throat, Sacral, "Charisma"),
    Channel::new(31, 7, Throat, G, "The Alpha"),
    Channel::new(8, 1, Throat, G, "Inspiration"),
    Channel::new(33, 13, Throat, G, "The Prodigal"),
    Channel::new(45, 21, Throat, Heart, "Money"),
    Channel::new(35, 36, Throat, SolarPlexus, "Transitoriness"),
    Channel::new(12, 22, Throat, SolarPlexus, "Openness"),
    Channel::new(25, 51, G, Heart, "Initiation"),
    Channel::new(46, 29, G, Sacral, "Discovery"),
    Channel::new(2, 14, G, Sacral, "The Beat"),
    Channel::new(15, 5, G, Sacral, "Rhythm"),
    Channel::new(10, 34, G, Sacral, "Exploration"),
    Channel::new(10, 57, G, Spleen, "Perfected Form"),
    Channel::new(26, 44, Heart, Spleen, "Surrender"),
    Channel::new(40, 37, Heart, SolarPlexus, "Community"),
    Channel::new(50, 27, Spleen, Sacral, "Preservation"),
    Channel::new(32, 54, Spleen, Root, "Transformation"),
    Channel::new(28, 38, Spleen, Root, "Struggle"),
    Channel::new(57, 34, Spleen, Sacral, "Power"),
    Channel::new(18, 58, Spleen, Root, "Judgment"),
    Channel::new(59, 6, Sacral, SolarPlexus, "Mating"),
    Channel::new(42, 53, Sacral, Root, "Maturation"),
    Channel::new(3, 60, Sacral, Root, "Mutation"),
    Channel::new(9, 52, Sacral, Root, "Concentration"),
    Channel::new(19, 49, Root, SolarPlexus, "Synthesis"),
    Channel::new(39, 55, Root, SolarPlexus, "Emoting"),
    Channel::new(41, 30, Root, SolarPlexus, "Recognition"),
];

/// Gate-level indices derived once from [`CHANNELS`].
#[derive(Debug)]
pub struct BodyGraph {
    /// Center of each gate, indexed by gate number (slot 0 unused).
    gate_centers: [Option<Center>; 65],
    /// Indices into [`CHANNELS`] of every channel touching a gate.
    gate_channels: Vec<Vec<usize>>,
}

static BODY_GRAPH: LazyLock<BodyGraph> = LazyLock::new(BodyGraph::build);

/// The process-wide body-graph index.
pub fn body_graph() -> &'static BodyGraph {
    &BODY_GRAPH
}

impl BodyGraph {
    fn build() -> Self {
        let mut gate_centers = [None; 65];
        let mut gate_channels = vec![Vec::new(); 65];
        for (idx, channel) in CHANNELS.iter().enumerate() {
            for (gate, center) in channel.gates.iter().zip(channel.centers) {
                gate_centers[*gate as usize] = Some(center);
                gate_channels[*gate as usize].push(idx);
            }
        }
        Self {
            gate_centers,
            gate_channels,
        }
    }

    /// All 36 channels.
    pub fn channels(&self) -> &'static [Channel; 36] {
        &CHANNELS
    }

    /// Center that owns `gate`.
    pub fn center_of(&self, gate: u8) -> Result<Center, BodyGraphError> {
        self.gate_centers
            .get(gate as usize)
            .copied()
            .flatten()
            .ok_or_else(|| BodyGraphError::lookup_miss("gate center", gate))
    }

    /// Channels touching `gate` (empty for an unknown gate).
    pub fn channels_of(&self, gate: u8) -> impl Iterator<Item = &'static Channel> + '_ {
        self.gate_channels
            .get(gate as usize)
            .into_iter()
            .flatten()
            .map(|&idx| &CHANNELS[idx])
    }

    /// Channel-partner candidates of `gate`: each gate that would complete
    /// a channel with it, paired with that channel.
    pub fn partners_of(&self, gate: u8) -> impl Iterator<Item = (u8, &'static Channel)> + '_ {
        self.channels_of(gate)
            .filter_map(move |channel| channel.partner_of(gate).map(|p| (p, channel)))
    }
}
