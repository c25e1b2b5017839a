//! Gate wheel: longitude → gate / line / color / tone / base.
//!
//! The ecliptic is divided into 64 gates of 5.625° each. The wheel does
//! not start at 0° Aries: gate 41 begins at 302° (2° Aquarius), so every
//! longitude is shifted by +58° before indexing. Each gate then splits into
//! 6 lines, each line into 6 colors, each color into 6 tones and each tone
//! into 5 bases.

use hd_core::normalize_360;
use serde::Serialize;

/// Shift that puts the start of gate 41 at wheel position 0.
pub const GATE_WHEEL_OFFSET_DEG: f64 = 58.0;

/// Arc covered by one gate.
pub const GATE_SPAN_DEG: f64 = 360.0 / 64.0;

/// Arc covered by one line.
pub const LINE_SPAN_DEG: f64 = GATE_SPAN_DEG / 6.0;

/// Gate numbers in wheel order, starting at 302° ecliptic longitude.
pub const GATE_WHEEL: [u8; 64] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42, 3, //
    27, 24, 2, 23, 8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56, //
    31, 33, 7, 4, 29, 59, 40, 64, 47, 6, 46, 18, 48, 57, 32, 50, //
    28, 44, 1, 43, 14, 34, 9, 5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// Nested gate codes for one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GateActivation {
    /// Gate number, 1..=64.
    pub gate: u8,
    /// Line within the gate, 1..=6.
    pub line: u8,
    /// Color within the line, 1..=6.
    pub color: u8,
    /// Tone within the color, 1..=6.
    pub tone: u8,
    /// Base within the tone, 1..=5.
    pub base: u8,
}

/// Bases on the whole wheel: 64 gates × 6 lines × 6 colors × 6 tones × 5 bases.
const BASES_PER_WHEEL: u64 = 64 * 6 * 6 * 6 * 5;

/// Map an ecliptic longitude (degrees, any range) onto the gate wheel.
///
/// Every level is read off one clamped base index, so the five codes
/// always name the same position even at the 360° seam.
pub fn activation_from_longitude(longitude_deg: f64) -> GateActivation {
    let angle = normalize_360(longitude_deg + GATE_WHEEL_OFFSET_DEG);
    let base_idx =
        ((angle / 360.0 * BASES_PER_WHEEL as f64).floor() as u64).min(BASES_PER_WHEEL - 1);

    let tone_idx = base_idx / 5;
    let color_idx = tone_idx / 6;
    let line_idx = color_idx / 6;
    let wheel_pos = (line_idx / 6) as usize;

    GateActivation {
        gate: GATE_WHEEL[wheel_pos],
        line: (line_idx % 6 + 1) as u8,
        color: (color_idx % 6 + 1) as u8,
        tone: (tone_idx % 6 + 1) as u8,
        base: (base_idx % 5 + 1) as u8,
    }
}

/// Position of `gate` on the wheel (0 = gate 41).
pub fn gate_wheel_index(gate: u8) -> Option<usize> {
    GATE_WHEEL.iter().position(|&g| g == gate)
}

/// Ecliptic longitude at which `gate` begins, in [0, 360).
pub fn gate_start_longitude(gate: u8) -> Option<f64> {
    gate_wheel_index(gate)
        .map(|pos| normalize_360(pos as f64 * GATE_SPAN_DEG - GATE_WHEEL_OFFSET_DEG))
}

/// The gate directly across the wheel (180° away).
pub fn opposite_gate(gate: u8) -> Option<u8> {
    gate_wheel_index(gate).map(|pos| GATE_WHEEL[(pos + 32) % 64])
}
