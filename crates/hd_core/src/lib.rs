//! Body identifiers and the ephemeris collaborator contract.
//!
//! Astronomy is not computed here. A chart query asks an [`Ephemeris`]
//! implementation for geocentric ecliptic longitudes, for the UT Julian
//! Date of a civil moment, and for the instant at which the Sun reaches a
//! given longitude. Everything above this seam is pure arithmetic over the
//! returned numbers.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hd_time::BirthMoment;
use serde::Serialize;

/// The 13 bodies that open gates in a chart.
///
/// Earth and the South Node are synthetic: they sit exactly opposite the
/// Sun and the North Node and are never queried from the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Body {
    Sun,
    Earth,
    Moon,
    NorthNode,
    SouthNode,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 13 bodies in chart order. Sun is first, Earth second and the
/// North Node fourth; the cross and variable readings index on that.
pub const ALL_BODIES: [Body; 13] = [
    Body::Sun,
    Body::Earth,
    Body::Moon,
    Body::NorthNode,
    Body::SouthNode,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// The body actually queried from the ephemeris for this one.
    pub const fn queried(self) -> Body {
        match self {
            Self::Earth => Self::Sun,
            Self::SouthNode => Self::NorthNode,
            other => other,
        }
    }

    /// Whether the longitude is the queried body's plus 180°.
    pub const fn is_synthetic(self) -> bool {
        matches!(self, Self::Earth | Self::SouthNode)
    }

    /// All 13 bodies in chart order.
    pub const fn all() -> &'static [Body; 13] {
        &ALL_BODIES
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of the two chart instants produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum InstantLabel {
    /// The birth instant (conscious side).
    Personality,
    /// The instant ~88° of solar arc before birth (unconscious side).
    Design,
}

impl InstantLabel {
    /// Short tag used in compact reports.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Personality => "prs",
            Self::Design => "des",
        }
    }
}

/// Errors reported by an ephemeris collaborator.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The backend cannot evaluate this body.
    UnsupportedBody(Body),
    /// No Sun crossing of the target longitude was found.
    NoCrossing {
        target_lon_deg: f64,
        search_start_jd: f64,
    },
    /// The requested date is outside the backend's coverage.
    OutOfRange { jd: f64 },
    /// Any other backend failure.
    Backend(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedBody(body) => write!(f, "unsupported body: {body}"),
            Self::NoCrossing {
                target_lon_deg,
                search_start_jd,
            } => write!(
                f,
                "no Sun crossing of {target_lon_deg:.6} deg after JD {search_start_jd:.6}"
            ),
            Self::OutOfRange { jd } => write!(f, "JD {jd} outside ephemeris coverage"),
            Self::Backend(msg) => write!(f, "ephemeris backend error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// Ephemeris collaborator seam.
///
/// Implementations must be deterministic: the same inputs always return
/// the same values. They are shared read-only across chart queries, hence
/// the `Send + Sync` bound.
pub trait Ephemeris: Send + Sync {
    /// Geocentric tropical ecliptic longitude of `body` at UT Julian Date
    /// `jd_ut`, in degrees. Only called with non-synthetic bodies.
    fn longitude_deg(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// First UT Julian Date at or after `search_start_jd` at which the Sun's
    /// longitude equals `target_lon_deg`.
    fn sun_crossing_jd(
        &self,
        target_lon_deg: f64,
        search_start_jd: f64,
    ) -> Result<f64, EphemerisError>;

    /// UT Julian Date of a civil moment.
    ///
    /// The default shifts local time by the UTC offset and converts on the
    /// proleptic Gregorian calendar. Backends with leap-second or ΔT
    /// handling should override it.
    fn civil_to_jd(&self, moment: &BirthMoment) -> Result<f64, EphemerisError> {
        Ok(moment.to_jd_ut())
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // A tiny negative remainder rounds up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// Longitude of any chart body, deriving Earth and the South Node from
/// their opposite bodies.
pub fn body_longitude_deg(
    ephemeris: &dyn Ephemeris,
    body: Body,
    jd_ut: f64,
) -> Result<f64, EphemerisError> {
    let lon = ephemeris.longitude_deg(body.queried(), jd_ut)?;
    if body.is_synthetic() {
        Ok(normalize_360(lon + 180.0))
    } else {
        Ok(normalize_360(lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSky;

    impl Ephemeris for FixedSky {
        fn longitude_deg(&self, body: Body, _jd_ut: f64) -> Result<f64, EphemerisError> {
            match body {
                Body::Sun => Ok(200.0),
                Body::NorthNode => Ok(350.0),
                Body::Pluto => Err(EphemerisError::UnsupportedBody(body)),
                _ => Ok(10.0),
            }
        }

        fn sun_crossing_jd(&self, target: f64, start: f64) -> Result<f64, EphemerisError> {
            Err(EphemerisError::NoCrossing {
                target_lon_deg: target,
                search_start_jd: start,
            })
        }
    }

    #[test]
    fn thirteen_bodies_in_chart_order() {
        assert_eq!(ALL_BODIES.len(), 13);
        assert_eq!(ALL_BODIES[0], Body::Sun);
        assert_eq!(ALL_BODIES[1], Body::Earth);
        assert_eq!(ALL_BODIES[3], Body::NorthNode);
    }

    #[test]
    fn synthetic_bodies_query_their_opposites() {
        assert_eq!(Body::Earth.queried(), Body::Sun);
        assert_eq!(Body::SouthNode.queried(), Body::NorthNode);
        assert_eq!(Body::Moon.queried(), Body::Moon);
        assert_eq!(ALL_BODIES.iter().filter(|b| b.is_synthetic()).count(), 2);
    }

    #[test]
    fn earth_is_sun_plus_180() {
        let lon = body_longitude_deg(&FixedSky, Body::Earth, 0.0).unwrap();
        assert!((lon - 20.0).abs() < 1e-12);
    }

    #[test]
    fn south_node_wraps() {
        let lon = body_longitude_deg(&FixedSky, Body::SouthNode, 0.0).unwrap();
        assert!((lon - 170.0).abs() < 1e-12);
    }

    #[test]
    fn backend_error_propagates() {
        let err = body_longitude_deg(&FixedSky, Body::Pluto, 0.0).unwrap_err();
        assert_eq!(err, EphemerisError::UnsupportedBody(Body::Pluto));
    }

    #[test]
    fn default_civil_conversion_uses_offset() {
        let m = BirthMoment::new(2000, 1, 1, 18, 0, 0, 6.0);
        let jd = FixedSky.civil_to_jd(&m).unwrap();
        assert!((jd - hd_time::J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!(normalize_360(360.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        for deg in [-1e-20, -1e-15, -7.1e-15] {
            let r = normalize_360(deg);
            assert!((0.0..360.0).contains(&r), "{deg} -> {r}");
        }
        assert_eq!(normalize_360(-1e-20), 0.0);
    }

    #[test]
    fn instant_label_codes() {
        assert_eq!(InstantLabel::Personality.code(), "prs");
        assert_eq!(InstantLabel::Design.code(), "des");
    }
}
