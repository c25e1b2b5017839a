//! Gate placements of all 13 bodies at one instant.

use hd_bodygraph::Placement;
use hd_core::{ALL_BODIES, Ephemeris, EphemerisError, InstantLabel, body_longitude_deg};
use tracing::trace;

use crate::error::ChartError;

/// Placements of every body at `jd_ut`, in canonical body order.
pub fn placements_at(
    ephemeris: &dyn Ephemeris,
    jd_ut: f64,
    label: InstantLabel,
) -> Result<Vec<Placement>, ChartError> {
    ALL_BODIES
        .iter()
        .map(|&body| {
            let lon = body_longitude_deg(ephemeris, body, jd_ut)?;
            if !lon.is_finite() {
                return Err(ChartError::Ephemeris(EphemerisError::Backend(format!(
                    "non-finite longitude for {body} at JD {jd_ut}"
                ))));
            }
            let placement = Placement::from_longitude(body, label, lon);
            trace!(
                body = body.name(),
                side = label.code(),
                lon,
                gate = placement.gate(),
                line = placement.line(),
                "placement"
            );
            Ok(placement)
        })
        .collect()
}
