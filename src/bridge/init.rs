use hue::light::{LightCategory, LightDescriptor};
use hue::lightdb;

use crate::backend::{Device, Endpoint};
use crate::resource::LightStore;

/// Find the light category of a device, judging by its first endpoint
///
/// Returns `None` for devices without endpoints, excluded models, and device
/// types that are not lights.
#[must_use]
pub fn classify<'a>(device: &'a Device, exclude: &[String]) -> Option<(LightCategory, &'a Endpoint)> {
    let endpoint = device.endpoints.first()?;

    if lightdb::is_excluded(&device.model_id) || exclude.contains(&device.model_id) {
        log::debug!("[{}] Model {:?} is excluded", device.name, device.model_id);
        return None;
    }

    let Some(category) = lightdb::light_category(endpoint.device_id) else {
        log::debug!(
            "[{}] Device type {:04x} is not a light",
            device.name,
            endpoint.device_id
        );
        return None;
    };

    Some((category, endpoint))
}

/// Create or refresh the light record for `device`
///
/// A known light only has its name updated. Returns the resulting descriptor,
/// or `None` if the device is not a light.
pub fn init_light(store: &mut LightStore, device: &Device, exclude: &[String]) -> Option<LightDescriptor> {
    let (category, endpoint) = classify(device, exclude)?;

    if let Some(light) = store.get_mut(&device.ieee_addr) {
        if light.descriptor.name != device.name {
            log::info!(
                "[{}] Renaming light (was {:?})",
                device.name,
                light.descriptor.name
            );
            light.descriptor.name.clone_from(&device.name);
        }
        return Some(light.descriptor.clone());
    }

    let descriptor = LightDescriptor {
        category,
        uniqueid: LightDescriptor::make_uniqueid(device.ieee_addr, device.manufacturer.as_deref()),
        name: device.name.clone(),
        modelid: device.model_id.clone(),
        manufacturername: device.manufacturer.clone().unwrap_or_default(),
        swversion: device.sw_build_id.clone().unwrap_or_default(),
    };

    let light = store.insert(
        device.ieee_addr,
        descriptor,
        category.default_state(),
        endpoint.id,
    );

    log::info!(
        "[{}] New light: {:?} (index {}, endpoint {})",
        device.name,
        category,
        light.index,
        light.endpoint
    );

    Some(light.descriptor.clone())
}
