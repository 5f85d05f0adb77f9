use crate::{HUE_MAX_BRI, HUE_MAX_SAT, XY_SCALE};

pub trait Clamp {
    /// Scale a unit value to the full unsigned 16-bit range, rounding
    fn unit_to_u16_clamped(self) -> u16;
    /// Scale a unit delta to the signed 16-bit range, rounding
    fn unit_to_i16_clamped(self) -> i16;
    fn unit_from_u16(value: u16) -> Self;
}

impl Clamp for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn unit_to_u16_clamped(self) -> u16 {
        (self * XY_SCALE).round().clamp(0.0, XY_SCALE) as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    fn unit_to_i16_clamped(self) -> i16 {
        (self * XY_SCALE)
            .round()
            .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
    }

    fn unit_from_u16(value: u16) -> Self {
        Self::from(value) / XY_SCALE
    }
}

/// Brightness as it may be sent to a device (never above [`HUE_MAX_BRI`])
#[must_use]
pub fn bri_clamped(bri: u32) -> u8 {
    u8::try_from(bri).map_or(HUE_MAX_BRI, |b| b.min(HUE_MAX_BRI))
}

#[must_use]
pub fn sat_clamped(sat: u8) -> u8 {
    sat.min(HUE_MAX_SAT)
}
