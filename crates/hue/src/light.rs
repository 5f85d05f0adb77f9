use serde::{Deserialize, Serialize};

use zcl::IeeeAddress;

use crate::lightdb;
use crate::state::{Alert, ColorMode, Effect, LightState};

/// The light categories a device can be classified as
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightCategory {
    #[serde(rename = "On/Off light")]
    OnOffLight,
    #[serde(rename = "On/Off plug-in unit")]
    OnOffPlugin,
    #[serde(rename = "Dimmable light")]
    DimmableLight,
    #[serde(rename = "Dimmable plug-in unit")]
    DimmablePlugin,
    #[serde(rename = "Color light")]
    ColorLight,
    #[serde(rename = "Extended color light")]
    ExtendedColorLight,
    #[serde(rename = "Color temperature light")]
    ColorTemperatureLight,
}

impl LightCategory {
    pub const DEFAULT_CT: u16 = 370;

    /// Initial state of a freshly classified light of this category
    #[must_use]
    pub fn default_state(&self) -> LightState {
        let base = LightState {
            on: false,
            reachable: false,
            ..LightState::default()
        };

        let dimmable = LightState {
            bri: Some(0),
            alert: Some(Alert::None),
            ..base.clone()
        };

        let color = LightState {
            hue: Some(0),
            sat: Some(0),
            xy: Some([0.0, 0.0]),
            effect: Some(Effect::None),
            colormode: Some(ColorMode::Hs),
            ..dimmable.clone()
        };

        match self {
            Self::OnOffLight | Self::OnOffPlugin => base,
            Self::DimmableLight | Self::DimmablePlugin => dimmable,
            Self::ColorLight => color,
            Self::ExtendedColorLight => LightState {
                ct: Some(Self::DEFAULT_CT),
                colormode: Some(ColorMode::Ct),
                ..color
            },
            Self::ColorTemperatureLight => LightState {
                ct: Some(Self::DEFAULT_CT),
                colormode: Some(ColorMode::Ct),
                ..dimmable
            },
        }
    }
}

/// Hue-side identity and product data of a light
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightDescriptor {
    #[serde(rename = "type")]
    pub category: LightCategory,
    pub uniqueid: String,
    pub name: String,
    pub modelid: String,
    pub manufacturername: String,
    pub swversion: String,
}

impl LightDescriptor {
    /// Build the Hue style unique id: colon separated address octets,
    /// followed by a vendor specific suffix
    #[must_use]
    pub fn make_uniqueid(addr: IeeeAddress, manufacturer: Option<&str>) -> String {
        format!(
            "{}-{}",
            addr.to_colon_string(),
            lightdb::uniqueid_suffix(manufacturer)
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use zcl::IeeeAddress;

    use crate::light::{LightCategory, LightDescriptor};
    use crate::state::{Alert, ColorMode, LightState};

    #[test]
    fn onoff_defaults() {
        for cat in [LightCategory::OnOffLight, LightCategory::OnOffPlugin] {
            assert_eq!(
                serde_json::to_value(cat.default_state()).unwrap(),
                json!({"on": false, "reachable": false})
            );
        }
    }

    #[test]
    fn dimmable_defaults() {
        let state = LightCategory::DimmablePlugin.default_state();
        assert_eq!(state.bri, Some(0));
        assert_eq!(state.alert, Some(Alert::None));
        assert_eq!(state.xy, None);
        assert_eq!(state.colormode, None);
    }

    #[test]
    fn color_defaults() {
        let state = LightCategory::ColorLight.default_state();
        assert_eq!(state.colormode, Some(ColorMode::Hs));
        assert_eq!(state.xy, Some([0.0, 0.0]));
        assert_eq!(state.ct, None);

        let state = LightCategory::ExtendedColorLight.default_state();
        assert_eq!(state.colormode, Some(ColorMode::Ct));
        assert_eq!(state.ct, Some(LightCategory::DEFAULT_CT));
        assert_eq!(state.hue, Some(0));

        let state = LightCategory::ColorTemperatureLight.default_state();
        assert_eq!(state.colormode, Some(ColorMode::Ct));
        assert_eq!(state.hue, None);
        assert_eq!(state.xy, None);
    }

    #[test]
    fn defaults_never_on_or_reachable() {
        let off = LightState::default();
        for cat in [
            LightCategory::OnOffLight,
            LightCategory::DimmableLight,
            LightCategory::ColorLight,
            LightCategory::ExtendedColorLight,
            LightCategory::ColorTemperatureLight,
        ] {
            let state = cat.default_state();
            assert_eq!(state.on, off.on);
            assert_eq!(state.reachable, off.reachable);
        }
    }

    #[test]
    fn uniqueid() {
        let addr = IeeeAddress::new(0x0017_8801_0a0b_0c0d);
        assert_eq!(
            LightDescriptor::make_uniqueid(addr, Some("Philips")),
            "00:17:88:01:0a:0b:0c:0d-0b"
        );
        assert_eq!(
            LightDescriptor::make_uniqueid(addr, Some("IKEA of Sweden")),
            "00:17:88:01:0a:0b:0c:0d-00"
        );
        assert_eq!(
            LightDescriptor::make_uniqueid(addr, None),
            "00:17:88:01:0a:0b:0c:0d-00"
        );
    }

    #[test]
    fn category_type_name() {
        assert_eq!(
            serde_json::to_value(LightCategory::ExtendedColorLight).unwrap(),
            json!("Extended color light")
        );
    }
}
