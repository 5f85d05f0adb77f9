use std::collections::BTreeMap;

use hue::light::LightDescriptor;
use hue::state::LightState;
use zcl::IeeeAddress;

use crate::backend::Lookup;

/// Everything the bridge knows about one light
#[derive(Clone, Debug, PartialEq)]
pub struct LightRecord {
    pub addr: IeeeAddress,
    pub descriptor: LightDescriptor,
    pub state: LightState,
    /// State as of the last publish
    pub snapshot: Option<LightState>,
    /// Endpoint commands are sent to
    pub endpoint: u8,
    /// Hue api v1 style numeric id, starting at 1
    pub index: u32,
}

impl LightRecord {
    /// Make sure a snapshot exists before `state` is mutated, so the next
    /// publish can see the difference
    pub fn retain_snapshot(&mut self) {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.state.clone());
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LightStore {
    lights: BTreeMap<IeeeAddress, LightRecord>,
}

impl LightStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    #[must_use]
    pub fn get(&self, addr: &IeeeAddress) -> Option<&LightRecord> {
        self.lights.get(addr)
    }

    pub fn get_mut(&mut self, addr: &IeeeAddress) -> Option<&mut LightRecord> {
        self.lights.get_mut(addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LightRecord> {
        self.lights.values()
    }

    /// Lowest index not used by any light
    #[must_use]
    pub fn next_index(&self) -> u32 {
        let mut used: Vec<u32> = self.lights.values().map(|light| light.index).collect();
        used.sort_unstable();

        let mut next = 1;
        for index in used {
            if index == next {
                next += 1;
            } else if index > next {
                break;
            }
        }
        next
    }

    /// Create a record for a new light, allocating the next free index
    pub fn insert(
        &mut self,
        addr: IeeeAddress,
        descriptor: LightDescriptor,
        state: LightState,
        endpoint: u8,
    ) -> &mut LightRecord {
        let index = self.next_index();
        self.lights.entry(addr).or_insert(LightRecord {
            addr,
            descriptor,
            state,
            snapshot: None,
            endpoint,
            index,
        })
    }

    pub fn remove(&mut self, addr: &IeeeAddress) -> Option<LightRecord> {
        self.lights.remove(addr)
    }

    #[must_use]
    pub fn lookup(&self, lookup: &Lookup) -> Option<&LightRecord> {
        match lookup {
            Lookup::Ieee(addr) => self.lights.get(addr),
            Lookup::Name(name) => self.iter().find(|light| light.descriptor.name == *name),
            Lookup::Index(index) => self.iter().find(|light| light.index == *index),
            Lookup::GroupId(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use hue::light::{LightCategory, LightDescriptor};
    use zcl::IeeeAddress;

    use crate::backend::Lookup;
    use crate::resource::LightStore;

    fn descriptor(name: &str) -> LightDescriptor {
        LightDescriptor {
            category: LightCategory::DimmableLight,
            uniqueid: format!("{name}-00"),
            name: name.to_string(),
            modelid: "LWB010".to_string(),
            manufacturername: "Philips".to_string(),
            swversion: "1.0".to_string(),
        }
    }

    fn insert(store: &mut LightStore, addr: u64, name: &str) -> u32 {
        let desc = descriptor(name);
        let state = desc.category.default_state();
        store
            .insert(IeeeAddress::new(addr), desc, state, 11)
            .index
    }

    #[test]
    fn indexes_fill_gaps() {
        let mut store = LightStore::new();
        assert_eq!(insert(&mut store, 1, "a"), 1);
        assert_eq!(insert(&mut store, 2, "b"), 2);
        assert_eq!(insert(&mut store, 3, "c"), 3);

        store.remove(&IeeeAddress::new(2));
        assert_eq!(store.next_index(), 2);
        assert_eq!(insert(&mut store, 4, "d"), 2);
        assert_eq!(store.next_index(), 4);
    }

    #[test]
    fn lookups() {
        let mut store = LightStore::new();
        insert(&mut store, 1, "Kitchen");
        insert(&mut store, 2, "Hallway");

        assert_eq!(
            store.lookup(&Lookup::Name("Hallway".into())).unwrap().index,
            2
        );
        assert_eq!(
            store.lookup(&Lookup::Index(1)).unwrap().descriptor.name,
            "Kitchen"
        );
        assert!(store.lookup(&Lookup::Ieee(IeeeAddress::new(2))).is_some());
        assert!(store.lookup(&Lookup::Ieee(IeeeAddress::new(5))).is_none());
        assert!(store.lookup(&Lookup::GroupId(1)).is_none());
    }

    #[test]
    fn retain_snapshot_once() {
        let mut store = LightStore::new();
        insert(&mut store, 1, "Kitchen");
        let rec = store.get_mut(&IeeeAddress::new(1)).unwrap();

        rec.retain_snapshot();
        rec.state.on = true;
        rec.retain_snapshot();

        assert!(!rec.snapshot.as_ref().unwrap().on);
    }
}
