//! Profile and incarnation cross.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use tracing::warn;

use crate::error::BodyGraphError;

/// Line pairs (personality Sun, design Sun) with their profile names.
const PROFILES: [((u8, u8), &str); 12] = [
    ((1, 3), "Investigator/Martyr"),
    ((1, 4), "Investigator/Opportunist"),
    ((2, 4), "Hermit/Opportunist"),
    ((2, 5), "Hermit/Heretic"),
    ((3, 5), "Martyr/Heretic"),
    ((3, 6), "Martyr/Role Model"),
    ((4, 6), "Opportunist/Role Model"),
    ((4, 1), "Opportunist/Investigator"),
    ((5, 1), "Heretic/Investigator"),
    ((5, 2), "Heretic/Hermit"),
    ((6, 2), "Role Model/Hermit"),
    ((6, 3), "Role Model/Martyr"),
];

fn profile_name(pair: (u8, u8)) -> Option<&'static str> {
    PROFILES.iter().find(|(k, _)| *k == pair).map(|(_, v)| *v)
}

/// The two Sun lines and their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub personality_line: u8,
    pub design_line: u8,
    pub name: &'static str,
    /// Set when only the reversed pair had a table entry.
    pub reversed: bool,
}

impl Profile {
    /// Look up `(personality_line, design_line)`, falling back to the
    /// reversed pair.
    pub fn from_lines(personality_line: u8, design_line: u8) -> Result<Self, BodyGraphError> {
        let pair = (personality_line, design_line);
        let (name, reversed) = match profile_name(pair) {
            Some(name) => (name, false),
            None => {
                let name = profile_name((design_line, personality_line)).ok_or_else(|| {
                    BodyGraphError::lookup_miss("profile", format!("{personality_line}/{design_line}"))
                })?;
                warn!(
                    personality_line,
                    design_line, "profile pair not tabulated; using reversed pair"
                );
                (name, true)
            }
        };
        Ok(Self {
            personality_line,
            design_line,
            name,
            reversed,
        })
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} {}", self.personality_line, self.design_line, self.name)
    }
}

/// The three families of incarnation cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CrossType {
    RightAngle,
    Juxtaposition,
    LeftAngle,
}

impl CrossType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RightAngle => "Right Angle",
            Self::Juxtaposition => "Juxtaposition",
            Self::LeftAngle => "Left Angle",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::RightAngle => "RAC",
            Self::Juxtaposition => "JXP",
            Self::LeftAngle => "LAC",
        }
    }

    /// Keyed by the unreversed Sun line pair; no reversal fallback.
    pub fn from_lines(personality_line: u8, design_line: u8) -> Result<Self, BodyGraphError> {
        match (personality_line, design_line) {
            (1, 3) | (1, 4) | (2, 4) | (2, 5) | (3, 5) | (3, 6) | (4, 6) => Ok(Self::RightAngle),
            (4, 1) => Ok(Self::Juxtaposition),
            (5, 1) | (5, 2) | (6, 2) | (6, 3) => Ok(Self::LeftAngle),
            (p, d) => Err(BodyGraphError::lookup_miss("cross type", format!("{p}/{d}"))),
        }
    }
}

/// Sun and Earth gates at both instants, with the cross family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncarnationCross {
    /// (Sun gate, Earth gate) at birth.
    pub personality: (u8, u8),
    /// (Sun gate, Earth gate) at the design instant.
    pub design: (u8, u8),
    pub cross_type: CrossType,
}

impl IncarnationCross {
    pub fn new(
        personality: (u8, u8),
        design: (u8, u8),
        personality_line: u8,
        design_line: u8,
    ) -> Result<Self, BodyGraphError> {
        Ok(Self {
            personality,
            design,
            cross_type: CrossType::from_lines(personality_line, design_line)?,
        })
    }
}

impl Display for IncarnationCross {
    /// e.g. `Right Angle (3/50 | 60/56)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}/{} | {}/{})",
            self.cross_type.name(),
            self.personality.0,
            self.personality.1,
            self.design.0,
            self.design.1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_lookup() {
        let p = Profile::from_lines(2, 4).unwrap();
        assert_eq!(p.name, "Hermit/Opportunist");
        assert!(!p.reversed);
        assert_eq!(p.to_string(), "2/4 Hermit/Opportunist");
    }

    #[test]
    fn reversed_lookup_is_flagged() {
        let direct = Profile::from_lines(2, 4).unwrap();
        let reversed = Profile::from_lines(4, 2).unwrap();
        assert_eq!(reversed.name, direct.name);
        assert!(reversed.reversed);
        assert_eq!((reversed.personality_line, reversed.design_line), (4, 2));
    }

    #[test]
    fn untabulated_pair_misses() {
        assert!(matches!(
            Profile::from_lines(1, 1),
            Err(BodyGraphError::LookupMiss { table: "profile", .. })
        ));
        assert!(Profile::from_lines(3, 4).is_err());
    }

    #[test]
    fn cross_types() {
        assert_eq!(CrossType::from_lines(1, 3).unwrap(), CrossType::RightAngle);
        assert_eq!(CrossType::from_lines(4, 1).unwrap(), CrossType::Juxtaposition);
        assert_eq!(CrossType::from_lines(6, 3).unwrap(), CrossType::LeftAngle);
        assert_eq!(CrossType::LeftAngle.code(), "LAC");
    }

    #[test]
    fn cross_type_has_no_reversal() {
        assert!(Profile::from_lines(4, 2).is_ok());
        assert!(matches!(
            CrossType::from_lines(4, 2),
            Err(BodyGraphError::LookupMiss { table: "cross type", .. })
        ));
    }

    #[test]
    fn cross_display() {
        let cross = IncarnationCross::new((3, 50), (60, 56), 2, 4).unwrap();
        assert_eq!(cross.to_string(), "Right Angle (3/50 | 60/56)");
    }

    #[test]
    fn every_profile_has_a_cross_type() {
        for ((p, d), _) in PROFILES {
            assert!(CrossType::from_lines(p, d).is_ok(), "{p}/{d}");
        }
    }
}
