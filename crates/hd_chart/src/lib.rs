//! Chart queries: from a birth moment to the full set of derived features.
//!
//! This crate provides:
//! - birth validation and design-instant resolution (88° of solar arc)
//! - per-instant placements of the 13 chart bodies
//! - `derive_features`, the single entry point producing a `FeatureResult`
//!
//! Astronomy is delegated to an [`hd_core::Ephemeris`] implementation.

pub mod design;
pub mod design_types;
pub mod error;
pub mod features;
pub mod features_types;
pub mod placements;

pub use design::{resolve_birth, resolve_design};
pub use design_types::DesignConfig;
pub use error::ChartError;
pub use features::{day_chart, derive_features, derive_features_with_config};
pub use features_types::FeatureResult;
pub use placements::placements_at;
