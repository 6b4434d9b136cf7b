//! Observability for the contact form.
//!
//! Structured logging setup plus counters for the submission flow.

pub mod metrics;

pub use metrics::{FormMetrics, FormMetricsSummary};

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Returns `false` if a
/// global subscriber was already set, which is harmless.
pub fn init_logging(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
