pub mod colorctrl;
pub mod identify;
pub mod levelctrl;
pub mod onoff;

use std::fmt::{self, Display};

use serde_json::Value;

use crate::cluster::colorctrl::ColorCtrlCommand;
use crate::cluster::identify::IdentifyCommand;
use crate::cluster::levelctrl::LevelCtrlCommand;
use crate::cluster::onoff::OnOffCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    Identify,
    OnOff,
    LevelCtrl,
    ColorCtrl,
    /// Any cluster this crate does not model
    Unsupported,
}

impl Cluster {
    #[must_use]
    pub const fn id(&self) -> Option<u16> {
        match self {
            Self::Identify => Some(0x0003),
            Self::OnOff => Some(0x0006),
            Self::LevelCtrl => Some(0x0008),
            Self::ColorCtrl => Some(0x0300),
            Self::Unsupported => None,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "genIdentify" => Self::Identify,
            "genOnOff" => Self::OnOff,
            "genLevelCtrl" => Self::LevelCtrl,
            "lightingColorCtrl" => Self::ColorCtrl,
            _ => Self::Unsupported,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identify => "genIdentify",
            Self::OnOff => "genOnOff",
            Self::LevelCtrl => "genLevelCtrl",
            Self::ColorCtrl => "lightingColorCtrl",
            Self::Unsupported => "unsupported",
        }
    }

    /// Map a named attribute of this cluster to its attribute id
    #[must_use]
    pub fn attribute_id(&self, name: &str) -> Option<u16> {
        match self {
            Self::OnOff => onoff::attribute_id(name),
            Self::LevelCtrl => levelctrl::attribute_id(name),
            Self::ColorCtrl => colorctrl::attribute_id(name),
            Self::Identify | Self::Unsupported => None,
        }
    }
}

impl Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cluster-specific command, with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZclCommand {
    Identify(IdentifyCommand),
    OnOff(OnOffCommand),
    LevelCtrl(LevelCtrlCommand),
    ColorCtrl(ColorCtrlCommand),
}

impl ZclCommand {
    #[must_use]
    pub const fn cluster(&self) -> Cluster {
        match self {
            Self::Identify(_) => Cluster::Identify,
            Self::OnOff(_) => Cluster::OnOff,
            Self::LevelCtrl(_) => Cluster::LevelCtrl,
            Self::ColorCtrl(_) => Cluster::ColorCtrl,
        }
    }

    #[must_use]
    pub const fn id(&self) -> u8 {
        match self {
            Self::Identify(cmd) => cmd.id(),
            Self::OnOff(cmd) => cmd.id(),
            Self::LevelCtrl(cmd) => cmd.id(),
            Self::ColorCtrl(cmd) => cmd.id(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identify(cmd) => cmd.name(),
            Self::OnOff(cmd) => cmd.name(),
            Self::LevelCtrl(cmd) => cmd.name(),
            Self::ColorCtrl(cmd) => cmd.name(),
        }
    }

    #[must_use]
    pub fn parameters(&self) -> Value {
        match self {
            Self::Identify(cmd) => cmd.parameters(),
            Self::OnOff(cmd) => cmd.parameters(),
            Self::LevelCtrl(cmd) => cmd.parameters(),
            Self::ColorCtrl(cmd) => cmd.parameters(),
        }
    }
}

impl Display for ZclCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} {}", self.cluster(), self.name(), self.parameters())
    }
}
