use serde_json::{Value, json};

/// Effect identifiers for the identify cluster `triggerEffect` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifyEffect {
    Blink = 0x00,
    Breathe = 0x01,
    StopEffect = 0xff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifyCommand {
    TriggerEffect {
        effect: IdentifyEffect,
        variant: u8,
    },
}

impl IdentifyCommand {
    #[must_use]
    pub const fn trigger(effect: IdentifyEffect) -> Self {
        Self::TriggerEffect { effect, variant: 0 }
    }

    #[must_use]
    pub const fn id(&self) -> u8 {
        match self {
            Self::TriggerEffect { .. } => 0x40,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TriggerEffect { .. } => "triggerEffect",
        }
    }

    #[must_use]
    pub fn parameters(&self) -> Value {
        match self {
            Self::TriggerEffect { effect, variant } => json!({
                "effectid": *effect as u8,
                "effectvariant": variant,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cluster::identify::{IdentifyCommand, IdentifyEffect};

    #[test]
    fn trigger_effect_parameters() {
        let cmd = IdentifyCommand::trigger(IdentifyEffect::StopEffect);
        assert_eq!(cmd.parameters()["effectid"], 255);
        assert_eq!(cmd.parameters()["effectvariant"], 0);
    }
}
