use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use isg_core::{Snapshot, Value};
use isg_engine::{FetchSettings, IsgClient, PollEvent, PollFailure, Poller};
use isg_logging::{isg_debug, isg_info, isg_warn};

use crate::config::AppConfig;

/// Verifies the console, logs its identity once, then logs every snapshot
/// until the device refuses access.
pub(crate) fn run(config: &AppConfig) -> Result<()> {
    let client = IsgClient::new(config.host.clone(), FetchSettings::default())
        .context("failed to create ISG client")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
    let language = runtime
        .block_on(client.test_connection())
        .with_context(|| format!("connection test against {} failed", config.host))?;
    isg_info!("Connected to ISG at {}, language {}", client.host(), language);

    match runtime.block_on(client.device_identity()) {
        Ok(identity) => isg_info!(
            "MAC address: {}, firmware: {}",
            identity.mac_address.as_deref().unwrap_or("unknown"),
            identity.firmware_version.as_deref().unwrap_or("unknown")
        ),
        Err(err) => isg_warn!("Could not read device identity: {}", err),
    }
    drop(runtime);

    let poller = Poller::spawn(client, config.poll_interval());
    let mut last_success: Option<DateTime<Local>> = None;
    while let Some(event) = poller.recv() {
        match event {
            PollEvent::Updated(snapshot) => {
                last_success = Some(Local::now());
                log_snapshot(&snapshot);
            }
            PollEvent::Failed {
                failure: PollFailure::Transient,
                message,
            } => {
                let since = last_success
                    .map(|at| at.to_rfc3339())
                    .unwrap_or_else(|| "never".to_string());
                isg_warn!("Update failed (last success: {}): {}", since, message);
            }
            PollEvent::Failed {
                failure: PollFailure::ReauthRequired,
                message,
            } => bail!("device refused access, reconfiguration required: {message}"),
        }
    }
    bail!("poller stopped unexpectedly")
}

fn log_snapshot(snapshot: &Snapshot) {
    for line in render_snapshot(snapshot) {
        isg_info!("{}", line);
    }
    match serde_json::to_string(snapshot) {
        Ok(json) => isg_debug!("Snapshot: {}", json),
        Err(err) => isg_warn!("Failed to serialize snapshot: {}", err),
    }
}

/// One `name: value unit` line per field; unconvertible values read
/// `unavailable`.
fn render_snapshot(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Some(Value::Number(number)) => match key.unit() {
                    Some(unit) => format!("{number} {unit}"),
                    None => number.to_string(),
                },
                Some(Value::Flag(true)) => "on".to_string(),
                Some(Value::Flag(false)) => "off".to_string(),
                None => "unavailable".to_string(),
            };
            format!("{}: {}", key.name(), rendered)
        })
        .collect()
}
