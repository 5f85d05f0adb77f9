use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;

use hue::light::LightDescriptor;
use zcl::{IeeeAddress, ZclCommand};

use crate::backend::{Destination, Device, Group, GroupRegistry, Lookup, Persistence, Transport};
use crate::error::{ApiError, ApiResult};

/// A sent command, as recorded by [`MemoryTransport`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentCommand {
    pub dest: Destination,
    pub endpoint: u8,
    pub command: ZclCommand,
}

/// Transport that logs and records every command instead of sending it
///
/// Commands whose name was registered with [`MemoryTransport::fail_command`]
/// are rejected with [`ApiError::SendFailed`].
#[derive(Debug, Default)]
pub struct MemoryTransport {
    sent: Mutex<Vec<SentCommand>>,
    failing: BTreeSet<&'static str>,
}

impl MemoryTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fail_command(mut self, name: &'static str) -> Self {
        self.failing.insert(name);
        self
    }

    /// Every command accepted so far, in order of dispatch
    #[must_use]
    pub fn sent(&self) -> Vec<SentCommand> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn send(&self, dest: &Destination, endpoint: u8, cmd: &ZclCommand) -> ApiResult<()> {
        if self.failing.contains(cmd.name()) {
            return Err(ApiError::SendFailed {
                dest: dest.to_string(),
                command: cmd.to_string(),
                reason: "rejected by transport".to_string(),
            });
        }

        log::debug!(
            "[{dest}/{endpoint}] Sending {cmd} ({:04x}:{:02x})",
            cmd.cluster().id().unwrap_or_default(),
            cmd.id()
        );

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentCommand {
                dest: *dest,
                endpoint,
                command: *cmd,
            });
        }
        Ok(())
    }
}

/// Fixed list of groups
#[derive(Clone, Debug, Default)]
pub struct GroupList(pub Vec<Group>);

impl GroupRegistry for GroupList {
    fn group(&self, lookup: &Lookup) -> Option<Group> {
        self.0
            .iter()
            .find(|grp| match lookup {
                Lookup::Name(name) => grp.name == *name,
                Lookup::GroupId(id) => grp.id == *id,
                Lookup::Index(index) => grp.index == *index,
                Lookup::Ieee(_) => false,
            })
            .cloned()
    }
}

/// Keeps the latest saved descriptor per device
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    saved: Mutex<BTreeMap<IeeeAddress, LightDescriptor>>,
}

impl MemoryPersistence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, addr: &IeeeAddress) -> Option<LightDescriptor> {
        self.saved
            .lock()
            .ok()
            .and_then(|saved| saved.get(addr).cloned())
    }
}

impl Persistence for MemoryPersistence {
    fn save(&self, device: &Device, descriptor: &LightDescriptor) {
        log::trace!("[{}] Saving light record {}", device.name, descriptor.uniqueid);

        if let Ok(mut saved) = self.saved.lock() {
            saved.insert(device.ieee_addr, descriptor.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use zcl::ZclCommand;
    use zcl::cluster::onoff::OnOffCommand;

    use crate::backend::memory::{GroupList, MemoryTransport};
    use crate::backend::{Destination, Group, GroupRegistry, Lookup, Transport};
    use crate::error::ApiError;

    fn groups() -> GroupList {
        GroupList(vec![
            Group {
                id: 7,
                name: "Kitchen".to_string(),
                index: 1,
            },
            Group {
                id: 9,
                name: "Hallway".to_string(),
                index: 2,
            },
        ])
    }

    #[test]
    fn group_lookup() {
        let groups = groups();
        assert_eq!(groups.group(&Lookup::Name("Hallway".into())).unwrap().id, 9);
        assert_eq!(groups.group(&Lookup::GroupId(7)).unwrap().index, 1);
        assert_eq!(groups.group(&Lookup::Index(2)).unwrap().name, "Hallway");
        assert!(groups.group(&Lookup::Index(3)).is_none());
        assert!(groups.group(&Lookup::Name("Attic".into())).is_none());
    }

    #[tokio::test]
    async fn transport_records() {
        let transport = MemoryTransport::new().fail_command("off");
        let dest = Destination::Group(7);

        transport
            .send(&dest, 0, &ZclCommand::OnOff(OnOffCommand::On))
            .await
            .unwrap();

        let err = transport
            .send(&dest, 0, &ZclCommand::OnOff(OnOffCommand::Off))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::SendFailed { .. }));

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].command, ZclCommand::OnOff(OnOffCommand::On));
        assert_eq!(sent[0].dest, dest);
    }
}
