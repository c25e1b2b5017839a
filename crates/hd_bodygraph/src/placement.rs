//! Per-body gate placements and the open-gate set of a chart.

use hd_core::{Body, InstantLabel};
use serde::Serialize;

use crate::gate::{GateActivation, activation_from_longitude};

/// One body's gate codes at one chart instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub body: Body,
    pub label: InstantLabel,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    pub activation: GateActivation,
}

impl Placement {
    pub fn from_longitude(body: Body, label: InstantLabel, longitude_deg: f64) -> Self {
        Self {
            body,
            label,
            longitude_deg,
            activation: activation_from_longitude(longitude_deg),
        }
    }

    pub fn gate(&self) -> u8 {
        self.activation.gate
    }

    pub fn line(&self) -> u8 {
        self.activation.line
    }

    pub fn tone(&self) -> u8 {
        self.activation.tone
    }
}

/// Which chart instants opened a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GateSource {
    Personality,
    Design,
    Both,
}

impl GateSource {
    fn merge(current: Option<Self>, label: InstantLabel) -> Self {
        let incoming = match label {
            InstantLabel::Personality => Self::Personality,
            InstantLabel::Design => Self::Design,
        };
        match current {
            None => incoming,
            Some(existing) if existing == incoming => existing,
            Some(_) => Self::Both,
        }
    }
}

/// Every placement of one chart: personality first, then design.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenGateSet {
    placements: Vec<Placement>,
}

impl OpenGateSet {
    /// Number of placements in a full two-instant chart.
    pub const FULL_CHART_LEN: usize = 26;

    /// Concatenate both sides, tagging each entry with its instant.
    pub fn new(personality: Vec<Placement>, design: Vec<Placement>) -> Self {
        let tagged = |label: InstantLabel| move |p: Placement| Placement { label, ..p };
        let placements = personality
            .into_iter()
            .map(tagged(InstantLabel::Personality))
            .chain(design.into_iter().map(tagged(InstantLabel::Design)))
            .collect();
        Self { placements }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Whether both instants contributed all 13 bodies.
    pub fn is_full_chart(&self) -> bool {
        self.len() == Self::FULL_CHART_LEN
    }

    /// Placements of one instant, in body order.
    pub fn side(&self, label: InstantLabel) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.label == label)
    }

    /// The placement of `body` at `label`, if present.
    pub fn find(&self, body: Body, label: InstantLabel) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|p| p.body == body && p.label == label)
    }

    pub fn contains_gate(&self, gate: u8) -> bool {
        self.placements.iter().any(|p| p.gate() == gate)
    }

    /// Which instants opened `gate`; `None` if it is closed.
    pub fn source_of(&self, gate: u8) -> Option<GateSource> {
        self.placements
            .iter()
            .filter(|p| p.gate() == gate)
            .fold(None, |acc, p| Some(GateSource::merge(acc, p.label)))
    }
}
