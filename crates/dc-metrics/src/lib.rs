use std::net::Ipv4Addr;
use std::sync::OnceLock;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{info, warn};

static EXPORTER_PORT: OnceLock<u16> = OnceLock::new();

/// Start the Prometheus scrape endpoint on `0.0.0.0:<port>` and install the
/// global recorder. The port is read from `port_env`, falling back to
/// `default_port` when unset or unparseable. Safe to call again: once an
/// exporter is live, its port is returned and nothing is reinstalled.
pub fn init_metrics(port_env: &str, default_port: u16) -> Option<u16> {
    if let Some(port) = EXPORTER_PORT.get() {
        return Some(*port);
    }

    let port = std::env::var(port_env)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default_port);

    let result = PrometheusBuilder::new()
        .with_http_listener((Ipv4Addr::UNSPECIFIED, port))
        .install();

    match result {
        Ok(()) => {
            let _ = EXPORTER_PORT.set(port);
            info!(metrics_port = port, "prometheus exporter listening");
            Some(port)
        }
        Err(err) => {
            warn!(error = %err, metrics_port = port, "prometheus exporter failed to start");
            None
        }
    }
}
