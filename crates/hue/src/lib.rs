#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod clamp;
pub mod diff;
pub mod error;
pub mod light;
pub mod lightdb;
pub mod request;
pub mod state;
pub mod update;

/// Highest brightness the Hue api exposes, and the highest level we send
pub const HUE_MAX_BRI: u8 = 254;

/// Highest saturation the Hue api exposes
pub const HUE_MAX_SAT: u8 = 254;

/// Scale between unit floats and 16-bit zigbee chromaticity values
pub const XY_SCALE: f64 = 65535.0;
