use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{HueError, HueResult};

/// Desired light attributes, as sent to `PUT /lights/<id>/state` in the Hue
/// api
///
/// `ct_inc`, `hue_inc`, `sat_inc` and `effect` are accepted, but there is no
/// zigbee mapping for them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LightRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bri: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bri_inc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xy: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xy_inc: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ct: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ct_inc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hue_inc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sat: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sat_inc: Option<i32>,
    /// Kept as raw json, so an explicit `null` (or any other non-string)
    /// still counts as present
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "present"
    )]
    pub alert: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub effect: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transitiontime: Option<u16>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl LightRequest {
    pub fn from_value(value: Value) -> HueResult<Self> {
        if !value.is_object() {
            return Err(HueError::RequestNotObject(value.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::error::HueError;
    use crate::request::LightRequest;

    #[test]
    fn parse_full() {
        let req = LightRequest::from_value(json!({
            "on": true,
            "bri": 300,
            "bri_inc": -20,
            "xy": [0.5, 0.25],
            "ct": 500,
            "hue": 100,
            "sat": 200,
            "alert": "select",
            "transitiontime": 4,
        }))
        .unwrap();

        assert_eq!(req.on, Some(true));
        assert_eq!(req.bri, Some(300));
        assert_eq!(req.bri_inc, Some(-20));
        assert_eq!(req.xy, Some([0.5, 0.25]));
        assert_eq!(req.alert, Some(json!("select")));
        assert_eq!(req.transitiontime, Some(4));
    }

    #[test]
    fn parse_unsupported_fields() {
        let req = LightRequest::from_value(json!({
            "ct_inc": 10,
            "hue_inc": -10,
            "sat_inc": 5,
            "effect": "colorloop",
        }))
        .unwrap();

        assert_eq!(req.ct_inc, Some(10));
        assert_eq!(req.effect, Some(json!("colorloop")));
    }

    #[test]
    fn parse_alert_any_type() {
        let req = LightRequest::from_value(json!({"alert": null})).unwrap();
        assert_eq!(req.alert, Some(Value::Null));

        let req = LightRequest::from_value(json!({"alert": 5})).unwrap();
        assert_eq!(req.alert, Some(json!(5)));

        let req = LightRequest::from_value(json!({"on": true})).unwrap();
        assert_eq!(req.alert, None);
    }

    #[test]
    fn parse_unknown_fields_ignored() {
        let req = LightRequest::from_value(json!({"on": false, "scene": "abc"})).unwrap();
        assert_eq!(req.on, Some(false));
    }

    #[test]
    fn parse_not_object() {
        let err = LightRequest::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, HueError::RequestNotObject(_)));
    }

    #[test]
    fn parse_bad_types() {
        assert!(LightRequest::from_value(json!({"on": "yes"})).is_err());
        assert!(LightRequest::from_value(json!({"xy": [0.5]})).is_err());
        assert!(LightRequest::from_value(json!({"bri": -1})).is_err());
    }
}
