//! Configuration for design-instant resolution.

use serde::Serialize;

/// Mean tropical year in days.
const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Solar arc and search window used to find the design instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignConfig {
    /// Degrees of solar arc between the design instant and birth.
    pub design_arc_deg: f64,
    /// How far before birth the crossing search starts, in days.
    pub lookback_days: f64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            design_arc_deg: 88.0,
            lookback_days: 100.0,
        }
    }
}

impl DesignConfig {
    pub fn new(design_arc_deg: f64, lookback_days: f64) -> Self {
        Self {
            design_arc_deg,
            lookback_days,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.design_arc_deg.is_finite()
            || self.design_arc_deg <= 0.0
            || self.design_arc_deg >= 360.0
        {
            return Err("design_arc_deg must be in (0, 360)");
        }
        if !self.lookback_days.is_finite() || self.lookback_days <= 0.0 {
            return Err("lookback_days must be positive");
        }
        // The Sun must be able to sweep the arc within the window.
        if self.lookback_days <= self.design_arc_deg / 360.0 * TROPICAL_YEAR_DAYS {
            return Err("lookback_days too short for design_arc_deg");
        }
        // Past one year the first crossing after the window start can be
        // the previous year's.
        if self.lookback_days >= TROPICAL_YEAR_DAYS {
            return Err("lookback_days must be shorter than a tropical year");
        }
        Ok(())
    }
}
