use std::fmt::{self, Debug};

use serde_json::Value;

use crate::cluster::Cluster;

#[derive(Clone, PartialEq)]
pub enum ZclAttrValue {
    Null,
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    I16(i16),
    E8(u8),
    String(String),
    Unsupported,
}

impl ZclAttrValue {
    /// Convert a loosely typed (json) attribute value, as delivered by
    /// zigbee stacks that decode frames for us
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(num) => num
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map_or(Self::Unsupported, Self::U32),
            Value::String(s) => Self::String(s.clone()),
            Value::Array(_) | Value::Object(_) => Self::Unsupported,
        }
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Bool(b) => Some(u64::from(*b)),
            Self::U8(val) | Self::E8(val) => Some(u64::from(*val)),
            Self::U16(val) => Some(u64::from(*val)),
            Self::U32(val) => Some(u64::from(*val)),
            Self::I16(val) => u64::try_from(*val).ok(),
            Self::Null | Self::String(_) | Self::Unsupported => None,
        }
    }

    /// Truthiness, as a boolean attribute
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::I16(val) => Some(*val != 0),
            other => other.as_u64().map(|v| v != 0),
        }
    }
}

impl Debug for ZclAttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(val) => write!(f, "bool:{val}"),
            Self::U8(val) => write!(f, "u8:{val:02X}"),
            Self::U16(val) => write!(f, "u16:{val:04X}"),
            Self::U32(val) => write!(f, "u32:{val:08X}"),
            Self::I16(val) => write!(f, "i16:{val:04X}"),
            Self::E8(val) => write!(f, "e8:{val:02X}"),
            Self::String(val) => write!(f, "str:{val}"),
            Self::Unsupported => write!(f, "Unsupported"),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ZclAttr {
    pub key: u16,
    pub value: ZclAttrValue,
}

impl ZclAttr {
    #[must_use]
    pub const fn new(key: u16, value: ZclAttrValue) -> Self {
        Self { key, value }
    }

    /// Build an attribute record from a named field, if the name is known for
    /// the cluster
    #[must_use]
    pub fn from_named(cluster: Cluster, name: &str, value: &Value) -> Option<Self> {
        let key = cluster.attribute_id(name)?;
        Some(Self::new(key, ZclAttrValue::from_json(value)))
    }
}

impl Debug for ZclAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:?}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::attr::{ZclAttr, ZclAttrValue};
    use crate::cluster::Cluster;
    use crate::cluster::colorctrl::ATTR_CURRENT_X;

    #[test]
    fn from_json_values() {
        assert_eq!(ZclAttrValue::from_json(&json!(true)), ZclAttrValue::Bool(true));
        assert_eq!(ZclAttrValue::from_json(&json!(42)), ZclAttrValue::U32(42));
        assert_eq!(ZclAttrValue::from_json(&json!(-1)), ZclAttrValue::Unsupported);
        assert_eq!(ZclAttrValue::from_json(&json!(1.5)), ZclAttrValue::Unsupported);
        assert_eq!(ZclAttrValue::from_json(&json!([1])), ZclAttrValue::Unsupported);
    }

    #[test]
    fn truthiness() {
        assert_eq!(ZclAttrValue::U8(0).as_bool(), Some(false));
        assert_eq!(ZclAttrValue::U32(1).as_bool(), Some(true));
        assert_eq!(ZclAttrValue::I16(-1).as_bool(), Some(true));
        assert_eq!(ZclAttrValue::Null.as_bool(), None);
    }

    #[test]
    fn named_attribute() {
        let attr = ZclAttr::from_named(Cluster::ColorCtrl, "currentX", &json!(32768)).unwrap();
        assert_eq!(attr.key, ATTR_CURRENT_X);
        assert_eq!(attr.value.as_u64(), Some(32768));

        assert!(ZclAttr::from_named(Cluster::ColorCtrl, "bogus", &json!(1)).is_none());
    }

    #[test]
    fn debug_format() {
        let attr = ZclAttr::new(0x4000, ZclAttrValue::U16(0xabcd));
        assert_eq!(format!("{attr:?}"), "4000:u16:ABCD");
    }
}
