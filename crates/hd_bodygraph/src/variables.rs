//! The four variable arrows.

use hd_core::{Body, InstantLabel};
use serde::Serialize;

use crate::error::BodyGraphError;
use crate::placement::OpenGateSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arrow {
    Left,
    Right,
}

impl Arrow {
    /// Tones 1-3 point left, 4-6 right.
    pub const fn from_tone(tone: u8) -> Self {
        if tone <= 3 { Self::Left } else { Self::Right }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Arrows read from the tones of both Suns and both North Nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variables {
    /// Personality Sun.
    pub right_up: Arrow,
    /// Personality North Node.
    pub right_down: Arrow,
    /// Design Sun.
    pub left_up: Arrow,
    /// Design North Node.
    pub left_down: Arrow,
}

impl Variables {
    pub fn from_tones(
        personality_sun: u8,
        personality_node: u8,
        design_sun: u8,
        design_node: u8,
    ) -> Self {
        Self {
            right_up: Arrow::from_tone(personality_sun),
            right_down: Arrow::from_tone(personality_node),
            left_up: Arrow::from_tone(design_sun),
            left_down: Arrow::from_tone(design_node),
        }
    }

    pub fn from_open_gates(open: &OpenGateSet) -> Result<Self, BodyGraphError> {
        let tone = |body: Body, label: InstantLabel| {
            open.find(body, label)
                .map(|p| p.tone())
                .ok_or_else(|| BodyGraphError::lookup_miss("placement", body.name()))
        };
        Ok(Self::from_tones(
            tone(Body::Sun, InstantLabel::Personality)?,
            tone(Body::NorthNode, InstantLabel::Personality)?,
            tone(Body::Sun, InstantLabel::Design)?,
            tone(Body::NorthNode, InstantLabel::Design)?,
        ))
    }

    /// Digestion reading.
    pub const fn determination(&self) -> &'static str {
        match self.left_up {
            Arrow::Left => "Active",
            Arrow::Right => "Passive",
        }
    }

    /// Awareness reading.
    pub const fn motivation(&self) -> &'static str {
        match self.right_up {
            Arrow::Left => "Strategic",
            Arrow::Right => "Receptive",
        }
    }

    /// Environment reading.
    pub const fn environment(&self) -> &'static str {
        match self.left_down {
            Arrow::Left => "Observed",
            Arrow::Right => "Observer",
        }
    }

    /// Perspective reading.
    pub const fn perspective(&self) -> &'static str {
        match self.right_down {
            Arrow::Left => "Focused",
            Arrow::Right => "Peripheral",
        }
    }
}
