pub mod memory;

use std::fmt::{self, Display};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use hue::light::LightDescriptor;
use zcl::{IeeeAddress, ZclCommand};

use crate::error::ApiResult;

/// One application endpoint of a device, as listed in its simple descriptor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: u8,
    #[serde(default)]
    pub profile_id: u16,
    pub device_id: u16,
}

/// A device, as known to the device registry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub ieee_addr: IeeeAddress,
    pub endpoints: Vec<Endpoint>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub sw_build_id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u16,
    pub name: String,
    pub index: u32,
}

/// How a light or group is addressed by a caller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lookup {
    Name(String),
    Ieee(IeeeAddress),
    GroupId(u16),
    Index(u32),
}

impl Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name {name:?}"),
            Self::Ieee(addr) => write!(f, "address {addr}"),
            Self::GroupId(id) => write!(f, "group id {id}"),
            Self::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// Where a command is sent
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Device(IeeeAddress),
    Group(u16),
}

impl Destination {
    /// Groups are always addressed at endpoint 0
    pub const GROUP_ENDPOINT: u8 = 0;
}

impl Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(addr) => write!(f, "{addr}"),
            Self::Group(id) => write!(f, "group {id}"),
        }
    }
}

/// Delivers cluster commands to the network
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, dest: &Destination, endpoint: u8, cmd: &ZclCommand) -> ApiResult<()>;
}

pub trait GroupRegistry: Send + Sync {
    fn group(&self, lookup: &Lookup) -> Option<Group>;
}

/// Stores updated device records. Fire-and-forget: failures are the
/// implementation's concern.
pub trait Persistence: Send + Sync {
    fn save(&self, device: &Device, descriptor: &LightDescriptor);
}
