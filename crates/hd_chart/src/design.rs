//! Birth and design instant resolution.

use hd_core::{Body, Ephemeris, EphemerisError, normalize_360};
use hd_time::BirthMoment;
use tracing::debug;

use crate::design_types::DesignConfig;
use crate::error::ChartError;

/// Validate `moment` and convert it to a UT Julian Date.
///
/// Validation runs before the ephemeris is consulted.
pub fn resolve_birth(ephemeris: &dyn Ephemeris, moment: &BirthMoment) -> Result<f64, ChartError> {
    moment.validate()?;
    let jd = ephemeris.civil_to_jd(moment)?;
    if !jd.is_finite() {
        return Err(ChartError::Ephemeris(EphemerisError::Backend(format!(
            "non-finite Julian Date for {moment}"
        ))));
    }
    Ok(jd)
}

/// Find the instant before `birth_jd` at which the Sun stood
/// `config.design_arc_deg` behind its birth longitude.
///
/// The search starts `config.lookback_days` before birth and takes the
/// first crossing after that. A crossing outside `[start, birth)` is
/// rejected.
pub fn resolve_design(
    ephemeris: &dyn Ephemeris,
    birth_jd: f64,
    config: &DesignConfig,
) -> Result<f64, ChartError> {
    config.validate().map_err(ChartError::InvalidConfig)?;

    let birth_sun = ephemeris.longitude_deg(Body::Sun, birth_jd)?;
    let target = normalize_360(birth_sun - config.design_arc_deg);
    let start = birth_jd - config.lookback_days;

    let design_jd = match ephemeris.sun_crossing_jd(target, start) {
        Ok(jd) => jd,
        Err(EphemerisError::NoCrossing { .. }) => {
            return Err(ChartError::DesignResolution(format!(
                "Sun never reaches {target:.6} deg after JD {start:.6}"
            )));
        }
        Err(e) => return Err(e.into()),
    };

    if !design_jd.is_finite() || design_jd < start || design_jd >= birth_jd {
        return Err(ChartError::DesignResolution(format!(
            "crossing at JD {design_jd} outside [{start:.6}, {birth_jd:.6})"
        )));
    }

    debug!(birth_jd, birth_sun, target, design_jd, "design instant resolved");
    Ok(design_jd)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sun moving at a constant rate; everything else fixed.
    struct LinearSun {
        jd0: f64,
        lon0: f64,
        rate: f64,
    }

    impl Ephemeris for LinearSun {
        fn longitude_deg(&self, _body: Body, jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(normalize_360(self.lon0 + self.rate * (jd_ut - self.jd0)))
        }

        fn sun_crossing_jd(&self, target: f64, start: f64) -> Result<f64, EphemerisError> {
            let at_start = self.longitude_deg(Body::Sun, start)?;
            let ahead = normalize_360(target - at_start);
            Ok(start + ahead / self.rate)
        }
    }

    struct NoSun;

    impl Ephemeris for NoSun {
        fn longitude_deg(&self, _body: Body, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(10.0)
        }

        fn sun_crossing_jd(&self, target: f64, start: f64) -> Result<f64, EphemerisError> {
            Err(EphemerisError::NoCrossing {
                target_lon_deg: target,
                search_start_jd: start,
            })
        }
    }

    /// Reports a crossing after birth.
    struct LateSun;

    impl Ephemeris for LateSun {
        fn longitude_deg(&self, _body: Body, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(10.0)
        }

        fn sun_crossing_jd(&self, _target: f64, start: f64) -> Result<f64, EphemerisError> {
            Ok(start + 200.0)
        }
    }

    const BIRTH: f64 = 2_447_000.25;

    #[test]
    fn linear_sun_design_is_88_degrees_back() {
        let eph = LinearSun {
            jd0: BIRTH,
            lon0: 120.0,
            rate: 0.9856,
        };
        let design = resolve_design(&eph, BIRTH, &DesignConfig::default()).unwrap();
        assert!((design - (BIRTH - 88.0 / 0.9856)).abs() < 1e-6);
        let lon = eph.longitude_deg(Body::Sun, design).unwrap();
        assert!((lon - 32.0).abs() < 1e-6);
    }

    #[test]
    fn design_wraps_through_zero() {
        let eph = LinearSun {
            jd0: BIRTH,
            lon0: 30.0,
            rate: 0.9856,
        };
        let design = resolve_design(&eph, BIRTH, &DesignConfig::default()).unwrap();
        let lon = eph.longitude_deg(Body::Sun, design).unwrap();
        assert!((lon - 302.0).abs() < 1e-6);
    }

    #[test]
    fn no_crossing_is_design_resolution() {
        let err = resolve_design(&NoSun, BIRTH, &DesignConfig::default()).unwrap_err();
        assert!(matches!(err, ChartError::DesignResolution(_)));
    }

    #[test]
    fn crossing_after_birth_rejected() {
        let err = resolve_design(&LateSun, BIRTH, &DesignConfig::default()).unwrap_err();
        assert!(matches!(err, ChartError::DesignResolution(_)));
    }

    #[test]
    fn bad_config_rejected() {
        let err = resolve_design(&NoSun, BIRTH, &DesignConfig::new(88.0, 10.0)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }

    #[test]
    fn multi_year_window_rejected() {
        let eph = LinearSun {
            jd0: BIRTH,
            lon0: 120.0,
            rate: 0.9856,
        };
        let err = resolve_design(&eph, BIRTH, &DesignConfig::new(88.0, 500.0)).unwrap_err();
        assert!(matches!(err, ChartError::InvalidConfig(_)));

        let design = resolve_design(&eph, BIRTH, &DesignConfig::new(88.0, 300.0)).unwrap();
        assert!((BIRTH - design - 88.0 / 0.9856).abs() < 1e-6);
    }

    #[test]
    fn invalid_moment_rejected_before_ephemeris() {
        let moment = BirthMoment::new(1990, 13, 1, 0, 0, 0, 0.0);
        let err = resolve_birth(&NoSun, &moment).unwrap_err();
        assert!(matches!(err, ChartError::InvalidTimestamp(_)));
    }
}
