use serde_json::Value;

use crate::state::{LightAttr, LightState};

fn xy_slice(state: &LightState) -> &[f64] {
    state.xy.as_ref().map_or(&[], |xy| xy.as_slice())
}

/// Has `attr` changed between `old` and `new`?
///
/// `xy` is compared element-wise, with an absent value counting as an empty
/// pair. Everything else is compared by value.
#[must_use]
pub fn attr_changed(attr: LightAttr, old: &LightState, new: &LightState) -> bool {
    match attr {
        LightAttr::Reachable => old.reachable != new.reachable,
        LightAttr::Xy => xy_slice(old) != xy_slice(new),
        attr => attr.value(old) != attr.value(new),
    }
}

/// Every attribute that differs between `old` and `new`, with its new value,
/// in publishing order
#[must_use]
pub fn state_diff(old: &LightState, new: &LightState) -> Vec<(LightAttr, Value)> {
    LightAttr::ALL
        .into_iter()
        .filter(|attr| attr_changed(*attr, old, new))
        .map(|attr| (attr, attr.value(new)))
        .collect()
}
