//! The nine energy centers of the body graph.

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Energy center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    Spleen,
    SolarPlexus,
    Sacral,
    Root,
}

/// All 9 centers, top of the graph to bottom.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::Spleen,
    Center::SolarPlexus,
    Center::Sacral,
    Center::Root,
];

impl Center {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G-Center",
            Self::Heart => "Heart",
            Self::Spleen => "Spleen",
            Self::SolarPlexus => "Solar Plexus",
            Self::Sacral => "Sacral",
            Self::Root => "Root",
        }
    }

    /// Two-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Head => "HD",
            Self::Ajna => "AA",
            Self::Throat => "TT",
            Self::G => "GC",
            Self::Heart => "HT",
            Self::Spleen => "SN",
            Self::SolarPlexus => "SP",
            Self::Sacral => "SL",
            Self::Root => "RT",
        }
    }

    /// 0-based index (Head=0 .. Root=8).
    pub const fn index(self) -> usize {
        match self {
            Self::Head => 0,
            Self::Ajna => 1,
            Self::Throat => 2,
            Self::G => 3,
            Self::Heart => 4,
            Self::Spleen => 5,
            Self::SolarPlexus => 6,
            Self::Sacral => 7,
            Self::Root => 8,
        }
    }

    /// Heart, Solar Plexus, Sacral and Root generate energy.
    pub const fn is_motor(self) -> bool {
        matches!(
            self,
            Self::Heart | Self::SolarPlexus | Self::Sacral | Self::Root
        )
    }

    /// All 9 centers in order.
    pub const fn all() -> &'static [Center; 9] {
        &ALL_CENTERS
    }
}

impl Display for Center {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_order() {
        for (i, c) in ALL_CENTERS.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn four_motors() {
        let motors: Vec<Center> = ALL_CENTERS.iter().copied().filter(|c| c.is_motor()).collect();
        assert_eq!(
            motors,
            [Center::Heart, Center::SolarPlexus, Center::Sacral, Center::Root]
        );
    }

    #[test]
    fn codes_unique() {
        let mut codes: Vec<&str> = ALL_CENTERS.iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 9);
    }
}
