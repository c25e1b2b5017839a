//! Error types for chart queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hd_bodygraph::BodyGraphError;
use hd_core::EphemerisError;
use hd_time::TimeError;

/// Errors from a chart query. No partial results are ever returned.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// The birth moment failed validation; no ephemeris call was made.
    InvalidTimestamp(TimeError),
    /// The design instant could not be located.
    DesignResolution(String),
    /// Error from the ephemeris collaborator.
    Ephemeris(EphemerisError),
    /// A static table had no entry for a derived key.
    LookupMiss(BodyGraphError),
    /// Invalid design configuration parameter.
    InvalidConfig(&'static str),
    /// The authority rules matched nothing; an internal inconsistency.
    UnreachableAuthority,
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimestamp(e) => write!(f, "{e}"),
            Self::DesignResolution(msg) => write!(f, "design resolution failed: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::LookupMiss(e) => write!(f, "lookup miss: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::UnreachableAuthority => {
                write!(f, "internal error: authority rules exhausted without a match")
            }
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTimestamp(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            Self::LookupMiss(e) => Some(e),
            Self::DesignResolution(_) | Self::InvalidConfig(_) | Self::UnreachableAuthority => {
                None
            }
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidTimestamp(e)
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<BodyGraphError> for ChartError {
    fn from(e: BodyGraphError) -> Self {
        match e {
            BodyGraphError::UnreachableAuthority => Self::UnreachableAuthority,
            other => Self::LookupMiss(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_inner() {
        let e = ChartError::from(TimeError::InvalidTimestamp("month must be <= 12"));
        assert_eq!(e.to_string(), "invalid timestamp: month must be <= 12");
        assert!(e.source().is_some());
        assert!(ChartError::InvalidConfig("x").source().is_none());
    }

    #[test]
    fn body_graph_errors_keep_their_kind() {
        assert_eq!(
            ChartError::from(BodyGraphError::UnreachableAuthority),
            ChartError::UnreachableAuthority
        );
        let miss = BodyGraphError::LookupMiss {
            table: "profile",
            key: "1/1".to_string(),
        };
        assert_eq!(ChartError::from(miss.clone()), ChartError::LookupMiss(miss));
    }
}
