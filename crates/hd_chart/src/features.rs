//! Chart feature derivation.

use hd_bodygraph::{
    Authority, BodyGraphError, ChannelGraph, Definition, EnergyType, IncarnationCross,
    OpenGateSet, Placement, Profile, Variables,
};
use hd_core::{Body, Ephemeris, InstantLabel};
use hd_time::{BirthMoment, UtcTime};
use tracing::debug;

use crate::design::{resolve_birth, resolve_design};
use crate::design_types::DesignConfig;
use crate::error::ChartError;
use crate::features_types::FeatureResult;
use crate::placements::placements_at;

/// Derive every chart feature for `moment` with the default design arc.
pub fn derive_features(
    ephemeris: &dyn Ephemeris,
    moment: &BirthMoment,
) -> Result<FeatureResult, ChartError> {
    derive_features_with_config(ephemeris, moment, &DesignConfig::default())
}

/// Derive every chart feature for `moment`.
///
/// Fails without a partial result if the moment is invalid, the design
/// instant cannot be located, the ephemeris fails, or a derived key is
/// missing from a static table.
pub fn derive_features_with_config(
    ephemeris: &dyn Ephemeris,
    moment: &BirthMoment,
    config: &DesignConfig,
) -> Result<FeatureResult, ChartError> {
    let birth_jd = resolve_birth(ephemeris, moment)?;
    let design_jd = resolve_design(ephemeris, birth_jd, config)?;

    let personality = placements_at(ephemeris, birth_jd, InstantLabel::Personality)?;
    let design = placements_at(ephemeris, design_jd, InstantLabel::Design)?;

    let p_sun = sun_of(&personality)?;
    let p_earth = earth_of(&personality)?;
    let d_sun = sun_of(&design)?;
    let d_earth = earth_of(&design)?;

    let profile = Profile::from_lines(p_sun.line(), d_sun.line())?;
    let incarnation_cross = IncarnationCross::new(
        (p_sun.gate(), p_earth.gate()),
        (d_sun.gate(), d_earth.gate()),
        p_sun.line(),
        d_sun.line(),
    )?;

    let open = OpenGateSet::new(personality.clone(), design.clone());
    let graph = ChannelGraph::from_open_gates(&open)?;
    let energy_type = EnergyType::from_graph(&graph);
    let authority = Authority::from_graph(&graph)?;
    let definition = Definition::from_graph(&graph)?;
    let variables = Variables::from_open_gates(&open)?;

    debug!(
        birth = %moment,
        energy_type = energy_type.name(),
        authority = authority.name(),
        profile = %profile,
        definition = definition.name,
        channels = graph.channels().len(),
        "chart derived"
    );

    Ok(FeatureResult {
        birth: *moment,
        birth_jd,
        design_jd,
        design_utc: UtcTime::from_jd(design_jd),
        energy_type,
        strategy: energy_type.strategy(),
        theme: energy_type.theme(),
        authority,
        profile,
        incarnation_cross,
        definition,
        variables,
        active_centers: graph.active_centers().iter().copied().collect(),
        active_channels: graph.channels().to_vec(),
        personality,
        design,
    })
}

/// Personality placements only, for a transit ("day") chart.
pub fn day_chart(
    ephemeris: &dyn Ephemeris,
    moment: &BirthMoment,
) -> Result<Vec<Placement>, ChartError> {
    let jd = resolve_birth(ephemeris, moment)?;
    placements_at(ephemeris, jd, InstantLabel::Personality)
}

fn find(placements: &[Placement], body: Body) -> Result<Placement, ChartError> {
    placements
        .iter()
        .find(|p| p.body == body)
        .copied()
        .ok_or_else(|| {
            ChartError::LookupMiss(BodyGraphError::LookupMiss {
                table: "placement",
                key: body.name().to_string(),
            })
        })
}

fn sun_of(placements: &[Placement]) -> Result<Placement, ChartError> {
    find(placements, Body::Sun)
}

fn earth_of(placements: &[Placement]) -> Result<Placement, ChartError> {
    find(placements, Body::Earth)
}
