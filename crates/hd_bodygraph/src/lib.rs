//! The body graph and the rules that classify a chart over it.
//!
//! This crate provides:
//! - the 9 centers, the 64-gate wheel and the 36 channels
//! - longitude → gate/line/color/tone/base mapping
//! - the open-gate set of a chart and its active channel graph
//! - energy type, authority, profile, incarnation cross, definition and
//!   variables
//!
//! All tables are static. Nothing here touches an ephemeris.

pub mod authority;
pub mod center;
pub mod channel;
pub mod channel_graph;
pub mod definition;
pub mod energy_type;
pub mod error;
pub mod gate;
pub mod placement;
pub mod profile;
pub mod variables;

pub use authority::Authority;
pub use center::{ALL_CENTERS, Center};
pub use channel::{BodyGraph, CHANNELS, Channel, body_graph};
pub use channel_graph::{ActiveChannel, ChannelGraph};
pub use definition::Definition;
pub use energy_type::{EnergyType, MOTOR_PATHS, throat_connected_to_motor};
pub use error::BodyGraphError;
pub use gate::{
    GATE_SPAN_DEG, GATE_WHEEL, GATE_WHEEL_OFFSET_DEG, GateActivation, LINE_SPAN_DEG,
    activation_from_longitude, gate_start_longitude, gate_wheel_index, opposite_gate,
};
pub use placement::{GateSource, OpenGateSet, Placement};
pub use profile::{CrossType, IncarnationCross, Profile};
pub use variables::{Arrow, Variables};
