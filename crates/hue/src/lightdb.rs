use crate::light::LightCategory;

// Zigbee device type ids and the light category they map to.
//
// Both the ZLL device ids and the Home Automation ids are listed. Where the
// two profiles disagree (0x0100 is "dimmable light" in ZLL but "on/off light"
// in HA), the ZLL meaning wins, since that is what lights mostly report.

// use shorter alias for better formatting
#[allow(clippy::enum_glob_use)]
use LightCategory::*;

const TAXONOMY: &[(u16, LightCategory)] = &[
    (0x0000, OnOffLight),
    (0x0010, OnOffPlugin),
    (0x0100, DimmableLight),
    (0x0101, DimmableLight),
    (0x0102, ColorLight),
    (0x010C, ColorTemperatureLight),
    (0x010D, ExtendedColorLight),
    (0x0110, DimmablePlugin),
    (0x0200, ColorLight),
    (0x0210, ExtendedColorLight),
    (0x0220, ColorTemperatureLight),
];

/// Models that announce a light device type, but are not lights
pub const EXCLUDED_MODELS: &[&str] = &["lumi.router"];

/// Unique id suffixes by manufacturer name
const UNIQUEID_SUFFIXES: &[(&str, &str)] = &[("OSRAM", "03"), ("Philips", "0b")];

pub const DEFAULT_UNIQUEID_SUFFIX: &str = "00";

#[must_use]
pub fn light_category(device_id: u16) -> Option<LightCategory> {
    TAXONOMY
        .iter()
        .find(|(id, _)| *id == device_id)
        .map(|(_, cat)| *cat)
}

#[must_use]
pub fn is_excluded(model_id: &str) -> bool {
    EXCLUDED_MODELS.contains(&model_id)
}

#[must_use]
pub fn uniqueid_suffix(manufacturer: Option<&str>) -> &'static str {
    manufacturer
        .and_then(|name| UNIQUEID_SUFFIXES.iter().find(|(mf, _)| *mf == name))
        .map_or(DEFAULT_UNIQUEID_SUFFIX, |(_, suffix)| *suffix)
}

#[cfg(test)]
mod tests {
    use crate::light::LightCategory;
    use crate::lightdb::{is_excluded, light_category, uniqueid_suffix};

    #[test]
    fn zll_types() {
        assert_eq!(light_category(0x0000), Some(LightCategory::OnOffLight));
        assert_eq!(light_category(0x0010), Some(LightCategory::OnOffPlugin));
        assert_eq!(light_category(0x0100), Some(LightCategory::DimmableLight));
        assert_eq!(light_category(0x0110), Some(LightCategory::DimmablePlugin));
        assert_eq!(light_category(0x0200), Some(LightCategory::ColorLight));
        assert_eq!(light_category(0x0210), Some(LightCategory::ExtendedColorLight));
        assert_eq!(light_category(0x0220), Some(LightCategory::ColorTemperatureLight));
    }

    #[test]
    fn ha_types() {
        assert_eq!(light_category(0x0101), Some(LightCategory::DimmableLight));
        assert_eq!(light_category(0x010D), Some(LightCategory::ExtendedColorLight));
    }

    #[test]
    fn unknown_types() {
        // dimmer switch, occupancy sensor
        assert_eq!(light_category(0x0820), None);
        assert_eq!(light_category(0x0107), None);
    }

    #[test]
    fn excluded() {
        assert!(is_excluded("lumi.router"));
        assert!(!is_excluded("LCT015"));
    }

    #[test]
    fn suffixes() {
        assert_eq!(uniqueid_suffix(Some("Philips")), "0b");
        assert_eq!(uniqueid_suffix(Some("OSRAM")), "03");
        assert_eq!(uniqueid_suffix(Some("innr")), "00");
        assert_eq!(uniqueid_suffix(None), "00");
    }
}
