use serde_json::{Value, json};

pub const ATTR_CURRENT_SATURATION: u16 = 0x0001;
pub const ATTR_CURRENT_X: u16 = 0x0003;
pub const ATTR_CURRENT_Y: u16 = 0x0004;
pub const ATTR_COLOR_TEMPERATURE: u16 = 0x0007;
pub const ATTR_COLOR_MODE: u16 = 0x0008;
pub const ATTR_ENHANCED_CURRENT_HUE: u16 = 0x4000;

/// Value of the `colorMode` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZclColorMode {
    HueSaturation = 0x00,
    Xy = 0x01,
    ColorTemperature = 0x02,
}

impl ZclColorMode {
    #[must_use]
    pub const fn from_code(code: u64) -> Option<Self> {
        match code {
            0x00 => Some(Self::HueSaturation),
            0x01 => Some(Self::Xy),
            0x02 => Some(Self::ColorTemperature),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCtrlCommand {
    MoveToSaturation {
        saturation: u8,
        transtime: u16,
    },
    MoveToColor {
        colorx: u16,
        colory: u16,
        transtime: u16,
    },
    StepColor {
        stepx: i16,
        stepy: i16,
        transtime: u16,
    },
    MoveToColorTemp {
        colortemp: u16,
        transtime: u16,
    },
    EnhancedMoveToHue {
        enhancehue: u16,
        direction: u8,
        transtime: u16,
    },
    EnhancedMoveToHueAndSaturation {
        enhancehue: u16,
        saturation: u8,
        transtime: u16,
    },
}

impl ColorCtrlCommand {
    #[must_use]
    pub const fn id(&self) -> u8 {
        match self {
            Self::MoveToSaturation { .. } => 0x03,
            Self::MoveToColor { .. } => 0x07,
            Self::StepColor { .. } => 0x09,
            Self::MoveToColorTemp { .. } => 0x0a,
            Self::EnhancedMoveToHue { .. } => 0x40,
            Self::EnhancedMoveToHueAndSaturation { .. } => 0x43,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MoveToSaturation { .. } => "moveToSaturation",
            Self::MoveToColor { .. } => "moveToColor",
            Self::StepColor { .. } => "stepColor",
            Self::MoveToColorTemp { .. } => "moveToColorTemp",
            Self::EnhancedMoveToHue { .. } => "enhancedMoveToHue",
            Self::EnhancedMoveToHueAndSaturation { .. } => "enhancedMoveToHueAndSaturation",
        }
    }

    #[must_use]
    pub fn parameters(&self) -> Value {
        match *self {
            Self::MoveToSaturation {
                saturation,
                transtime,
            } => json!({"saturation": saturation, "transtime": transtime}),
            Self::MoveToColor {
                colorx,
                colory,
                transtime,
            } => json!({"colorx": colorx, "colory": colory, "transtime": transtime}),
            Self::StepColor {
                stepx,
                stepy,
                transtime,
            } => json!({"stepx": stepx, "stepy": stepy, "transtime": transtime}),
            Self::MoveToColorTemp {
                colortemp,
                transtime,
            } => json!({"colortemp": colortemp, "transtime": transtime}),
            Self::EnhancedMoveToHue {
                enhancehue,
                direction,
                transtime,
            } => json!({"enhancehue": enhancehue, "direction": direction, "transtime": transtime}),
            Self::EnhancedMoveToHueAndSaturation {
                enhancehue,
                saturation,
                transtime,
            } => json!({
                "enhancehue": enhancehue,
                "saturation": saturation,
                "transtime": transtime,
            }),
        }
    }
}

#[must_use]
pub fn attribute_id(name: &str) -> Option<u16> {
    match name {
        "currentSaturation" => Some(ATTR_CURRENT_SATURATION),
        "currentX" => Some(ATTR_CURRENT_X),
        "currentY" => Some(ATTR_CURRENT_Y),
        "colorTemperature" => Some(ATTR_COLOR_TEMPERATURE),
        "colorMode" => Some(ATTR_COLOR_MODE),
        "enhancedCurrentHue" => Some(ATTR_ENHANCED_CURRENT_HUE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::cluster::colorctrl::{ColorCtrlCommand, ZclColorMode};

    #[test]
    fn color_mode_codes() {
        assert_eq!(ZclColorMode::from_code(0), Some(ZclColorMode::HueSaturation));
        assert_eq!(ZclColorMode::from_code(1), Some(ZclColorMode::Xy));
        assert_eq!(ZclColorMode::from_code(2), Some(ZclColorMode::ColorTemperature));
        assert_eq!(ZclColorMode::from_code(3), None);
    }

    #[test]
    fn step_color_parameters() {
        let cmd = ColorCtrlCommand::StepColor {
            stepx: -100,
            stepy: 200,
            transtime: 4,
        };
        assert_eq!(cmd.id(), 0x09);
        assert_eq!(cmd.parameters()["stepx"], -100);
        assert_eq!(cmd.parameters()["stepy"], 200);
    }
}
