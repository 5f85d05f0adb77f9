use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::broadcast::{Receiver, Sender};

use hue::diff::state_diff;

use crate::config::{AggregateMode, PublishConfig};
use crate::model::topic::TopicTemplate;
use crate::resource::LightRecord;

/// Something the bridge wants the outside world to see
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputEvent {
    Publish {
        topic: String,
        payload: Value,
        retain: bool,
    },
    DispatchFailure {
        light: String,
        command: String,
        error: String,
    },
}

impl OutputEvent {
    fn retained(topic: String, payload: Value) -> Self {
        Self::Publish {
            topic,
            payload,
            retain: true,
        }
    }
}

/// Turns light state changes into [`OutputEvent`]s
#[derive(Clone, Debug)]
pub struct Publisher {
    template: TopicTemplate,
    attributes: bool,
    aggregate: AggregateMode,
    tx: Sender<OutputEvent>,
}

impl Publisher {
    const EVENTS_BUFFER_SIZE: usize = 128;

    #[must_use]
    pub fn new(config: &PublishConfig) -> Self {
        Self {
            template: TopicTemplate::compile(&config.topic),
            attributes: config.attributes,
            aggregate: config.aggregate,
            tx: Sender::new(Self::EVENTS_BUFFER_SIZE),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> Receiver<OutputEvent> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: OutputEvent) {
        if let Err(err) = self.tx.send(event) {
            log::trace!("No subscribers for output event: {:?}", err.0);
        }
    }

    #[must_use]
    pub fn topic(&self, light: &LightRecord) -> String {
        let addr = light.addr.to_string();
        let index = light.index.to_string();
        self.template.render(&[
            ("name", light.descriptor.name.as_str()),
            ("ieeeAddr", addr.as_str()),
            ("index", index.as_str()),
        ])
    }

    /// Publish whatever changed in `light` since its last publish, and
    /// advance its snapshot. Returns the number of events emitted.
    pub fn publish(&self, light: &mut LightRecord) -> usize {
        let snapshot = light.snapshot.get_or_insert_with(|| light.state.clone());
        let changes = state_diff(snapshot, &light.state);
        *snapshot = light.state.clone();

        if changes.is_empty() {
            return 0;
        }

        log::debug!(
            "[{}] Publishing changes: {}",
            light.descriptor.name,
            changes.iter().map(|(attr, _)| attr.name()).join(", ")
        );

        let topic = self.topic(light);
        let mut events = vec![];

        if self.attributes {
            for (attr, value) in changes {
                events.push(OutputEvent::retained(format!("{topic}/{attr}"), value));
            }
        }

        match self.aggregate {
            AggregateMode::Full => {
                events.push(OutputEvent::retained(topic, json!(light.state)));
            }
            AggregateMode::Compact => {
                let payload = json!({
                    "val": light.state.summary_value(),
                    "hue_state": light.state,
                });
                events.push(OutputEvent::retained(topic, payload));
            }
            AggregateMode::None => {}
        }

        let count = events.len();
        for event in events {
            self.emit(event);
        }
        count
    }
}
