use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::Receiver;
use tokio::time::sleep;

use zcl::{Cluster, IeeeAddress};

use zhue::backend::memory::{GroupList, MemoryPersistence, MemoryTransport};
use zhue::backend::{Device, Group};
use zhue::bridge::publish::OutputEvent;
use zhue::bridge::report::Report;
use zhue::bridge::{Bridge, Target};
use zhue::config;
use zhue::error::{ApiError, ApiResult};

/// Replay zigbee device events through the light bridge, printing every
/// published event as a json line
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file (yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: Utf8PathBuf,

    /// Group definitions (json list of `{id, name, index}`)
    #[arg(short, long)]
    groups: Option<Utf8PathBuf>,
}

/// One line of input
#[derive(Deserialize, Debug)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ReplayEvent {
    Device(Device),
    Report {
        ieee: IeeeAddress,
        cluster: String,
        data: Map<String, Value>,
    },
    Availability {
        ieee: IeeeAddress,
        online: bool,
    },
    Remove {
        ieee: IeeeAddress,
    },
    Request {
        target: Target,
        payload: Value,
    },
    /// Let time pass, so debounced publishes can fire
    Wait {
        ms: u64,
    },
}

/*
 * Formatter function to output in syslog format. This makes sense when running
 * as a service (where output might go to a log file, or the system journal)
 */
#[allow(clippy::match_same_arms)]
fn syslog_format(
    buf: &mut pretty_env_logger::env_logger::fmt::Formatter,
    record: &log::Record,
) -> std::io::Result<()> {
    writeln!(
        buf,
        "<{}>{}: {}",
        match record.level() {
            log::Level::Error => 3,
            log::Level::Warn => 4,
            log::Level::Info => 6,
            log::Level::Debug => 7,
            log::Level::Trace => 7,
        },
        record.target(),
        record.args()
    )
}

fn init_logging() -> ApiResult<()> {
    /* Try to provide reasonable default filters, when RUST_LOG is not specified */
    const DEFAULT_LOG_FILTERS: &[&str] = &["info", "zhue=debug"];

    let log_filters = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTERS.join(","));

    /* Detect if we need syslog or human-readable formatting */
    if std::env::var("SYSTEMD_EXEC_PID").is_ok_and(|pid| pid == std::process::id().to_string()) {
        Ok(pretty_env_logger::env_logger::builder()
            .format(syslog_format)
            .parse_filters(&log_filters)
            .try_init()?)
    } else {
        Ok(pretty_env_logger::formatted_timed_builder()
            .parse_filters(&log_filters)
            .try_init()?)
    }
}

fn load_groups(args: &Args) -> ApiResult<Vec<Group>> {
    let Some(filename) = &args.groups else {
        return Ok(vec![]);
    };
    let data = std::fs::read_to_string(filename)?;
    Ok(serde_json::from_str(&data)?)
}

fn print_events(rx: &mut Receiver<OutputEvent>) -> ApiResult<()> {
    let mut out = std::io::stdout().lock();
    while let Ok(event) = rx.try_recv() {
        writeln!(out, "{}", serde_json::to_string(&event)?)?;
    }
    Ok(())
}

async fn handle_event(bridge: &Bridge, event: ReplayEvent) -> ApiResult<()> {
    match event {
        ReplayEvent::Device(device) => {
            if bridge.add_light(&device).await.is_none() {
                log::debug!("[{}] Not a light, skipping", device.name);
            }
        }
        ReplayEvent::Report {
            ieee,
            cluster,
            data,
        } => {
            let report = Report::from_named(Cluster::from_name(&cluster), &data);
            bridge.handle_report(&ieee, &report).await;
        }
        ReplayEvent::Availability { ieee, online } => {
            bridge.handle_availability(&ieee, online).await;
        }
        ReplayEvent::Remove { ieee } => {
            bridge.remove_light(&ieee).await;
        }
        ReplayEvent::Request { target, payload } => {
            let outcome = bridge.request(&target, payload).await?;
            log::info!(
                "Request for {target:?}: {} sent, {} failed",
                outcome.sent.len(),
                outcome.failed.len()
            );
        }
        ReplayEvent::Wait { ms } => sleep(Duration::from_millis(ms)).await,
    }
    Ok(())
}

async fn run() -> ApiResult<()> {
    init_logging()?;

    let args = Args::parse();

    let config = config::parse(&args.config)?;
    log::debug!("Configuration loaded successfully");

    let groups = load_groups(&args)?;

    let bridge = Bridge::new(
        config,
        Arc::new(MemoryTransport::new()),
        Arc::new(GroupList(groups)),
        Arc::new(MemoryPersistence::new()),
    );
    let mut rx = bridge.subscribe();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let result = serde_json::from_str::<ReplayEvent>(&line)
            .map_err(|err| ApiError::InvalidEvent(err.to_string()));

        match result {
            Ok(event) => {
                if let Err(err) = handle_event(&bridge, event).await {
                    log::warn!("Event failed: {err}");
                }
            }
            Err(err) => log::warn!("{err}"),
        }

        print_events(&mut rx)?;
    }

    /* Flush publishes still waiting for their quiet window */
    sleep(Duration::from_millis(bridge.config().bridge.debounce_ms * 2)).await;
    print_events(&mut rx)?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        log::error!("zhue error: {err}");
        log::error!("Fatal error encountered, cannot continue.");
    }
}
