//! Zigbee Cluster Library vocabulary for lights
//!
//! Only the clusters, commands and attributes needed to drive and observe
//! lights are modelled. Everything else maps to an explicit unsupported
//! variant, so callers never compare raw cluster or command strings.

pub mod addr;
pub mod attr;
pub mod cluster;
pub mod error;

pub use addr::IeeeAddress;
pub use cluster::{Cluster, ZclCommand};
