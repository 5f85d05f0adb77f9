use serde_json::{Map, Value};

use hue::XY_SCALE;
use hue::state::{ColorMode, LightState};
use zcl::Cluster;
use zcl::attr::{ZclAttr, ZclAttrValue};
use zcl::cluster::colorctrl::{
    ATTR_COLOR_MODE, ATTR_COLOR_TEMPERATURE, ATTR_CURRENT_SATURATION, ATTR_CURRENT_X,
    ATTR_CURRENT_Y, ATTR_ENHANCED_CURRENT_HUE, ZclColorMode,
};
use zcl::cluster::levelctrl::ATTR_CURRENT_LEVEL;
use zcl::cluster::onoff::ATTR_ON_OFF;

/// A reported attribute that affects light state
#[derive(Clone, Debug, PartialEq)]
pub enum LightAttribute {
    OnOff(bool),
    CurrentLevel(u32),
    ColorTemperature(u16),
    EnhancedHue(u16),
    Saturation(u8),
    CurrentX(u16),
    CurrentY(u16),
    /// `None` for color mode codes we do not know
    ColorMode(Option<ColorMode>),
    Unsupported(Cluster, Option<u16>),
}

impl LightAttribute {
    #[must_use]
    pub fn decode(cluster: Cluster, attr: &ZclAttr) -> Self {
        let value = &attr.value;
        let decoded = match (cluster, attr.key) {
            (Cluster::OnOff, ATTR_ON_OFF) => value.as_bool().map(Self::OnOff),
            (Cluster::LevelCtrl, ATTR_CURRENT_LEVEL) => num(value).map(Self::CurrentLevel),
            (Cluster::ColorCtrl, ATTR_COLOR_TEMPERATURE) => num(value).map(Self::ColorTemperature),
            (Cluster::ColorCtrl, ATTR_ENHANCED_CURRENT_HUE) => num(value).map(Self::EnhancedHue),
            (Cluster::ColorCtrl, ATTR_CURRENT_SATURATION) => num(value).map(Self::Saturation),
            (Cluster::ColorCtrl, ATTR_CURRENT_X) => num(value).map(Self::CurrentX),
            (Cluster::ColorCtrl, ATTR_CURRENT_Y) => num(value).map(Self::CurrentY),
            (Cluster::ColorCtrl, ATTR_COLOR_MODE) => value
                .as_u64()
                .map(|code| Self::ColorMode(ZclColorMode::from_code(code).map(color_mode))),
            _ => None,
        };

        decoded.unwrap_or(Self::Unsupported(cluster, Some(attr.key)))
    }
}

fn num<T: TryFrom<u64>>(value: &ZclAttrValue) -> Option<T> {
    value.as_u64().and_then(|val| T::try_from(val).ok())
}

const fn color_mode(mode: ZclColorMode) -> ColorMode {
    match mode {
        ZclColorMode::HueSaturation => ColorMode::Hs,
        ZclColorMode::Xy => ColorMode::Xy,
        ZclColorMode::ColorTemperature => ColorMode::Ct,
    }
}

/// One attribute report from a device: any number of attributes of a single
/// cluster
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub cluster: Cluster,
    pub attributes: Vec<LightAttribute>,
}

impl Report {
    #[must_use]
    pub fn from_attrs(cluster: Cluster, attrs: &[ZclAttr]) -> Self {
        Self {
            cluster,
            attributes: attrs
                .iter()
                .map(|attr| LightAttribute::decode(cluster, attr))
                .collect(),
        }
    }

    /// Build a report from named fields (`onOff`, `currentLevel`, ..). Field
    /// names that parse as a number are taken as attribute ids.
    #[must_use]
    pub fn from_named(cluster: Cluster, fields: &Map<String, Value>) -> Self {
        let attributes = fields
            .iter()
            .map(|(name, value)| {
                let attr = ZclAttr::from_named(cluster, name, value).or_else(|| {
                    parse_attr_id(name).map(|key| ZclAttr::new(key, ZclAttrValue::from_json(value)))
                });

                attr.map_or(Self::unsupported(cluster), |attr| {
                    LightAttribute::decode(cluster, &attr)
                })
            })
            .collect();

        Self {
            cluster,
            attributes,
        }
    }

    const fn unsupported(cluster: Cluster) -> LightAttribute {
        LightAttribute::Unsupported(cluster, None)
    }
}

fn parse_attr_id(name: &str) -> Option<u16> {
    name.strip_prefix("0x").map_or_else(
        || name.parse().ok(),
        |hex| u16::from_str_radix(hex, 16).ok(),
    )
}

/// Fold one report into a light state
///
/// Any report marks the light as reachable. Values are taken as reported;
/// brightness is not clamped here.
pub fn apply_report(state: &mut LightState, report: &Report) {
    state.reachable = true;

    for attr in &report.attributes {
        match attr {
            LightAttribute::OnOff(on) => state.on = *on,
            LightAttribute::CurrentLevel(level) => state.bri = Some(*level),
            LightAttribute::ColorTemperature(ct) => state.ct = Some(*ct),
            LightAttribute::EnhancedHue(hue) => state.hue = Some(*hue),
            LightAttribute::Saturation(sat) => state.sat = Some(*sat),
            LightAttribute::CurrentX(x) => {
                state.xy.get_or_insert([0.0, 0.0])[0] = f64::from(*x) / XY_SCALE;
            }
            LightAttribute::CurrentY(y) => {
                state.xy.get_or_insert([0.0, 0.0])[1] = f64::from(*y) / XY_SCALE;
            }
            LightAttribute::ColorMode(Some(mode)) => state.colormode = Some(*mode),
            LightAttribute::ColorMode(None) => {
                log::debug!("Ignoring unknown color mode in {} report", report.cluster);
            }
            LightAttribute::Unsupported(cluster, key) => {
                log::debug!("Ignoring unsupported attribute {key:04x?} of {cluster}");
            }
        }
    }
}

/// [`apply_report`], as a reducer
#[must_use]
pub fn reduce(mut state: LightState, report: &Report) -> LightState {
    apply_report(&mut state, report);
    state
}
