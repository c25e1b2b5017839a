//! Result record of a chart query.

use hd_bodygraph::{
    ActiveChannel, Authority, Center, Definition, EnergyType, IncarnationCross, Placement, Profile,
    Variables,
};
use hd_time::{BirthMoment, UtcTime};
use serde::Serialize;

/// Everything derived for one birth moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureResult {
    /// The birth moment as given.
    pub birth: BirthMoment,
    /// Birth instant as UT Julian Date.
    pub birth_jd: f64,
    /// Design instant as UT Julian Date.
    pub design_jd: f64,
    /// Design instant as a UTC calendar value.
    pub design_utc: UtcTime,
    pub energy_type: EnergyType,
    pub strategy: &'static str,
    pub theme: &'static str,
    pub authority: Authority,
    pub profile: Profile,
    pub incarnation_cross: IncarnationCross,
    pub definition: Definition,
    pub variables: Variables,
    /// Active centers in canonical center order.
    pub active_centers: Vec<Center>,
    /// Active channels in order of discovery.
    pub active_channels: Vec<ActiveChannel>,
    /// Placements at birth, in canonical body order.
    pub personality: Vec<Placement>,
    /// Placements at the design instant, in canonical body order.
    pub design: Vec<Placement>,
}

impl FeatureResult {
    /// Gate codes of the active channels, e.g. `["0360", "4253"]`.
    ///
    /// Each code is both gates zero-padded to two digits, in channel-table
    /// order rather than the order the gates were found. The 3-60 channel
    /// is always `"0360"`, never `"360"` or `"6003"`.
    pub fn channel_codes(&self) -> Vec<String> {
        self.active_channels
            .iter()
            .map(|active| active.channel.to_string())
            .collect()
    }
}
