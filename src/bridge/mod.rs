pub mod command;
pub mod init;
pub mod publish;
pub mod report;

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::sync::broadcast::Receiver;

use hue::light::LightDescriptor;
use hue::request::LightRequest;
use zcl::{IeeeAddress, ZclCommand};

use crate::backend::{Destination, Device, GroupRegistry, Lookup, Persistence, Transport};
use crate::bridge::publish::{OutputEvent, Publisher};
use crate::bridge::report::Report;
use crate::config::{AppConfig, FailurePolicy};
use crate::error::{ApiError, ApiResult};
use crate::model::debounce::Debouncer;
use crate::resource::{LightRecord, LightStore};

/// What a light request is aimed at
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Light(Lookup),
    Group(Lookup),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchFailure {
    pub command: ZclCommand,
    pub error: String,
}

/// Result of a light request, once every command has settled
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOutcome {
    pub sent: Vec<ZclCommand>,
    pub failed: Vec<DispatchFailure>,
    /// Did the light state change as a result?
    pub changed: bool,
}

struct BridgeInner {
    config: AppConfig,
    lights: Mutex<LightStore>,
    debounce: Mutex<Debouncer<IeeeAddress>>,
    publisher: Publisher,
    transport: Arc<dyn Transport>,
    groups: Arc<dyn GroupRegistry>,
    persistence: Arc<dyn Persistence>,
}

/// The light synchronization engine
///
/// Owns every light record. Device reports, availability changes and light
/// requests are fed in through the `handle_*` methods and [`Bridge::request`];
/// resulting state changes come out of [`Bridge::subscribe`].
#[derive(Clone)]
pub struct Bridge {
    inner: Arc<BridgeInner>,
}

impl Bridge {
    #[must_use]
    pub fn new(
        config: AppConfig,
        transport: Arc<dyn Transport>,
        groups: Arc<dyn GroupRegistry>,
        persistence: Arc<dyn Persistence>,
    ) -> Self {
        let window = Duration::from_millis(config.bridge.debounce_ms);
        let publisher = Publisher::new(&config.publish);

        Self {
            inner: Arc::new(BridgeInner {
                config,
                lights: Mutex::new(LightStore::new()),
                debounce: Mutex::new(Debouncer::new(window)),
                publisher,
                transport,
                groups,
                persistence,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn subscribe(&self) -> Receiver<OutputEvent> {
        self.inner.publisher.subscribe()
    }

    /// A copy of the light record matching `lookup`
    pub async fn light(&self, lookup: &Lookup) -> Option<LightRecord> {
        self.inner.lights.lock().await.lookup(lookup).cloned()
    }

    /// Classify a device and create or refresh its light record. Returns the
    /// light descriptor, if the device is a light.
    pub async fn add_light(&self, device: &Device) -> Option<LightDescriptor> {
        let descriptor = {
            let mut lights = self.inner.lights.lock().await;
            init::init_light(&mut lights, device, &self.inner.config.bridge.exclude_models)?
        };

        self.inner.persistence.save(device, &descriptor);

        Some(descriptor)
    }

    pub async fn remove_light(&self, addr: &IeeeAddress) -> Option<LightDescriptor> {
        let light = self.inner.lights.lock().await.remove(addr)?;
        self.inner.debounce.lock().await.cancel(addr);

        log::info!("[{}] Removed light", light.descriptor.name);

        Some(light.descriptor)
    }

    /// Apply an attribute report, and schedule a publish once reports for
    /// this device have been quiet for the debounce window
    ///
    /// Returns false if the device is not a known light.
    pub async fn handle_report(&self, addr: &IeeeAddress, report: &Report) -> bool {
        {
            let mut lights = self.inner.lights.lock().await;
            let Some(light) = lights.get_mut(addr) else {
                log::trace!("Ignoring {} report for unknown light {addr}", report.cluster);
                return false;
            };

            log::trace!("[{}] Report: {report:?}", light.descriptor.name);

            light.retain_snapshot();
            report::apply_report(&mut light.state, report);
        }

        let bridge = self.clone();
        let addr = *addr;
        let mut debounce = self.inner.debounce.lock().await;
        if debounce.is_pending(&addr) {
            log::trace!("[{addr}] Publish still pending, restarting quiet window");
        }
        debounce.schedule(addr, async move {
            bridge.publish(&addr).await;
        });

        true
    }

    /// Mark a light as online or offline, and publish right away
    pub async fn handle_availability(&self, addr: &IeeeAddress, online: bool) -> bool {
        let mut lights = self.inner.lights.lock().await;
        let Some(light) = lights.get_mut(addr) else {
            return false;
        };

        log::info!(
            "[{}] Light is {}",
            light.descriptor.name,
            if online { "online" } else { "offline" }
        );

        light.retain_snapshot();
        light.state.reachable = online;
        self.inner.publisher.publish(light);

        true
    }

    /// Publish pending changes for a light. Returns the number of events
    /// emitted.
    pub async fn publish(&self, addr: &IeeeAddress) -> usize {
        let mut lights = self.inner.lights.lock().await;
        lights
            .get_mut(addr)
            .map_or(0, |light| self.inner.publisher.publish(light))
    }

    fn dispatch_failed(&self, name: &str, cmd: &ZclCommand, err: &ApiError) {
        match self.inner.config.publish.dispatch_failures {
            FailurePolicy::Ignore => {}
            FailurePolicy::Log => log::warn!("[{name}] Failed to send {cmd}: {err}"),
            FailurePolicy::Emit => self.inner.publisher.emit(OutputEvent::DispatchFailure {
                light: name.to_string(),
                command: cmd.to_string(),
                error: err.to_string(),
            }),
        }
    }

    /// Carry out a light request (a Hue style `state` object) for a light or
    /// group
    ///
    /// All commands are sent concurrently. For lights, the requested values of
    /// every successful command are then merged into the light state, and
    /// published if anything changed. Groups have no state of their own.
    pub async fn request(&self, target: &Target, payload: Value) -> ApiResult<RequestOutcome> {
        let req = LightRequest::from_value(payload)
            .map_err(|err| ApiError::InvalidRequest(err.to_string()))?;

        let (dest, endpoint, name) = match target {
            Target::Light(lookup) => {
                let lights = self.inner.lights.lock().await;
                let light = lights
                    .lookup(lookup)
                    .ok_or_else(|| ApiError::LightNotFound(lookup.clone()))?;
                (
                    Destination::Device(light.addr),
                    light.endpoint,
                    light.descriptor.name.clone(),
                )
            }
            Target::Group(lookup) => {
                let group = self
                    .inner
                    .groups
                    .group(lookup)
                    .ok_or_else(|| ApiError::GroupNotFound(lookup.clone()))?;
                (Destination::Group(group.id), Destination::GROUP_ENDPOINT, group.name)
            }
        };

        let plan = command::synthesize(&req);
        log::debug!("[{name}] Sending {} command(s) for {req:?}", plan.len());

        let results = join_all(
            plan.iter()
                .map(|pc| self.inner.transport.send(&dest, endpoint, &pc.command)),
        )
        .await;

        let mut outcome = RequestOutcome::default();
        let mut effects = vec![];
        for (pc, res) in plan.into_iter().zip(results) {
            match res {
                Ok(()) => {
                    outcome.sent.push(pc.command);
                    effects.push(pc.effect);
                }
                Err(err) => {
                    self.dispatch_failed(&name, &pc.command, &err);
                    outcome.failed.push(DispatchFailure {
                        command: pc.command,
                        error: err.to_string(),
                    });
                }
            }
        }

        let Destination::Device(addr) = dest else {
            return Ok(outcome);
        };

        let mut lights = self.inner.lights.lock().await;
        if let Some(light) = lights.get_mut(&addr) {
            light.retain_snapshot();
            for effect in &effects {
                outcome.changed |= effect.apply(&mut light.state);
            }
            if outcome.changed {
                self.inner.publisher.publish(light);
            }
        }

        Ok(outcome)
    }
}
