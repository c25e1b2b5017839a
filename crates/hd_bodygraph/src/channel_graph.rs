//! Active channels and centers of one chart, with path connectivity.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::center::Center;
use crate::channel::{Channel, body_graph};
use crate::error::BodyGraphError;
use crate::placement::{GateSource, OpenGateSet};

/// A channel whose two gates are both open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveChannel {
    pub channel: Channel,
    /// Provenance of `channel.gates[0]` and `channel.gates[1]`.
    pub sources: [GateSource; 2],
}

/// The active subgraph of the body graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelGraph {
    channels: Vec<ActiveChannel>,
    centers: BTreeSet<Center>,
    adjacency: [[bool; 9]; 9],
}

impl ChannelGraph {
    /// Collect every channel whose gates both appear in `open`.
    ///
    /// Channels come out in order of first discovery, walking placements
    /// personality first. Fails with a lookup miss on a gate that is not on
    /// the wheel.
    pub fn from_open_gates(open: &OpenGateSet) -> Result<Self, BodyGraphError> {
        let graph = body_graph();
        let mut seen = BTreeSet::new();
        let mut found = Vec::new();

        for placement in open.placements() {
            let gate = placement.gate();
            graph.center_of(gate)?;
            for (partner, channel) in graph.partners_of(gate) {
                if !open.contains_gate(partner) || !seen.insert(channel.key()) {
                    continue;
                }
                let [a, b] = channel.gates;
                let sources = [source(open, a)?, source(open, b)?];
                found.push(ActiveChannel {
                    channel: *channel,
                    sources,
                });
            }
        }

        Ok(Self::from_channels(found))
    }

    fn from_channels(channels: Vec<ActiveChannel>) -> Self {
        let mut centers = BTreeSet::new();
        let mut adjacency = [[false; 9]; 9];
        for active in &channels {
            let [a, b] = active.channel.centers;
            centers.insert(a);
            centers.insert(b);
            adjacency[a.index()][b.index()] = true;
            adjacency[b.index()][a.index()] = true;
        }
        Self {
            channels,
            centers,
            adjacency,
        }
    }

    pub fn channels(&self) -> &[ActiveChannel] {
        &self.channels
    }

    /// Active centers in canonical center order.
    pub fn active_centers(&self) -> &BTreeSet<Center> {
        &self.centers
    }

    pub fn is_active(&self, center: Center) -> bool {
        self.centers.contains(&center)
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Whether some active channel joins `a` and `b` directly.
    pub fn has_edge(&self, a: Center, b: Center) -> bool {
        self.adjacency[a.index()][b.index()]
    }

    /// Whether every consecutive pair along `path` is joined by an active
    /// channel. Only the stated path is checked.
    pub fn is_connected(&self, path: &[Center]) -> bool {
        path.len() >= 2 && path.windows(2).all(|pair| self.has_edge(pair[0], pair[1]))
    }

    /// Number of distinct unordered center pairs joined by active channels.
    pub fn center_pair_count(&self) -> usize {
        self.channels
            .iter()
            .map(|active| {
                let [a, b] = active.channel.centers;
                (a.min(b), a.max(b))
            })
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// `|active centers| - |distinct center pairs|`.
    pub fn split_value(&self) -> i32 {
        self.centers.len() as i32 - self.center_pair_count() as i32
    }
}

fn source(open: &OpenGateSet, gate: u8) -> Result<GateSource, BodyGraphError> {
    open.source_of(gate)
        .ok_or_else(|| BodyGraphError::lookup_miss("open gate", gate))
}
