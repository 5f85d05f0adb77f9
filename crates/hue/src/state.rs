use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Hs,
    Xy,
    Ct,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    #[default]
    None,
    Select,
    Lselect,
}

impl Alert {
    /// Anything other than `select` or `lselect` means `none`, including
    /// values that are not strings at all
    #[must_use]
    pub fn normalize(value: &Value) -> Self {
        match value.as_str() {
            Some("select") => Self::Select,
            Some("lselect") => Self::Lselect,
            _ => Self::None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    #[default]
    None,
    Colorloop,
}

/// Canonical state of a single light, in Hue api terms
///
/// Which optional fields are present depends on the light category (see
/// [`crate::light::LightCategory::default_state`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LightState {
    pub on: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bri: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sat: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub effect: Option<Effect>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xy: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ct: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alert: Option<Alert>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub colormode: Option<ColorMode>,
    pub reachable: bool,
}

impl LightState {
    /// The single number summarizing this light: brightness when on, else 0
    #[must_use]
    pub fn summary_value(&self) -> u32 {
        if self.on { self.bri.unwrap_or(0) } else { 0 }
    }
}

/// Names of the attributes of [`LightState`], in publishing order
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LightAttr {
    On,
    Bri,
    Hue,
    Sat,
    Effect,
    Xy,
    Ct,
    Alert,
    Colormode,
    Reachable,
}

impl LightAttr {
    pub const ALL: [Self; 10] = [
        Self::On,
        Self::Bri,
        Self::Hue,
        Self::Sat,
        Self::Effect,
        Self::Xy,
        Self::Ct,
        Self::Alert,
        Self::Colormode,
        Self::Reachable,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Bri => "bri",
            Self::Hue => "hue",
            Self::Sat => "sat",
            Self::Effect => "effect",
            Self::Xy => "xy",
            Self::Ct => "ct",
            Self::Alert => "alert",
            Self::Colormode => "colormode",
            Self::Reachable => "reachable",
        }
    }

    /// The attribute value as a literal json value (`null` when absent)
    #[must_use]
    pub fn value(&self, state: &LightState) -> Value {
        match self {
            Self::On => json!(state.on),
            Self::Bri => json!(state.bri),
            Self::Hue => json!(state.hue),
            Self::Sat => json!(state.sat),
            Self::Effect => json!(state.effect),
            Self::Xy => json!(state.xy),
            Self::Ct => json!(state.ct),
            Self::Alert => json!(state.alert),
            Self::Colormode => json!(state.colormode),
            Self::Reachable => json!(state.reachable),
        }
    }
}

impl Display for LightAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::state::{Alert, ColorMode, LightAttr, LightState};

    #[test]
    fn alert_normalize() {
        assert_eq!(Alert::normalize(&json!("select")), Alert::Select);
        assert_eq!(Alert::normalize(&json!("lselect")), Alert::Lselect);
        assert_eq!(Alert::normalize(&json!("none")), Alert::None);
        assert_eq!(Alert::normalize(&json!("bogus")), Alert::None);
        assert_eq!(Alert::normalize(&json!("")), Alert::None);
        assert_eq!(Alert::normalize(&json!(5)), Alert::None);
        assert_eq!(Alert::normalize(&json!(true)), Alert::None);
        assert_eq!(Alert::normalize(&Value::Null), Alert::None);
    }

    #[test]
    fn serialize_skips_absent() {
        let state = LightState {
            on: true,
            bri: Some(100),
            colormode: Some(ColorMode::Xy),
            xy: Some([0.5, 0.25]),
            ..LightState::default()
        };

        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({
                "on": true,
                "bri": 100,
                "xy": [0.5, 0.25],
                "colormode": "xy",
                "reachable": false,
            })
        );
    }

    #[test]
    fn summary_value() {
        let mut state = LightState {
            on: true,
            bri: Some(42),
            ..LightState::default()
        };
        assert_eq!(state.summary_value(), 42);

        state.on = false;
        assert_eq!(state.summary_value(), 0);

        state.on = true;
        state.bri = None;
        assert_eq!(state.summary_value(), 0);
    }

    #[test]
    fn attr_values() {
        let state = LightState {
            on: true,
            alert: Some(Alert::Lselect),
            ..LightState::default()
        };
        assert_eq!(LightAttr::On.value(&state), json!(true));
        assert_eq!(LightAttr::Alert.value(&state), json!("lselect"));
        assert_eq!(LightAttr::Xy.value(&state), json!(null));
        assert_eq!(LightAttr::Colormode.name(), "colormode");
    }
}
