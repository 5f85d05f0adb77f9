use serde_json::{Value, json};

pub const ATTR_ON_OFF: u16 = 0x0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnOffCommand {
    Off,
    On,
}

impl OnOffCommand {
    #[must_use]
    pub const fn from_bool(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    #[must_use]
    pub const fn id(&self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0x01,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    #[must_use]
    pub fn parameters(&self) -> Value {
        json!({})
    }
}

#[must_use]
pub fn attribute_id(name: &str) -> Option<u16> {
    match name {
        "onOff" => Some(ATTR_ON_OFF),
        _ => None,
    }
}
