use serde_json::{Value, json};

pub const ATTR_CURRENT_LEVEL: u16 = 0x0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelCtrlCommand {
    Step {
        stepmode: u8,
        stepsize: u8,
        transtime: u16,
    },
    MoveToLevelWithOnOff {
        level: u8,
        transtime: u16,
    },
}

impl LevelCtrlCommand {
    #[must_use]
    pub const fn id(&self) -> u8 {
        match self {
            Self::Step { .. } => 0x02,
            Self::MoveToLevelWithOnOff { .. } => 0x04,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Step { .. } => "step",
            Self::MoveToLevelWithOnOff { .. } => "moveToLevelWithOnOff",
        }
    }

    #[must_use]
    pub fn parameters(&self) -> Value {
        match self {
            Self::Step {
                stepmode,
                stepsize,
                transtime,
            } => json!({
                "stepmode": stepmode,
                "stepsize": stepsize,
                "transtime": transtime,
            }),
            Self::MoveToLevelWithOnOff { level, transtime } => json!({
                "level": level,
                "transtime": transtime,
            }),
        }
    }
}

#[must_use]
pub fn attribute_id(name: &str) -> Option<u16> {
    match name {
        "currentLevel" => Some(ATTR_CURRENT_LEVEL),
        _ => None,
    }
}
