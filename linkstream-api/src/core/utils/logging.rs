use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter used by the global loggers. `RUST_LOG` takes precedence, otherwise
/// every linkstream crate logs at `log_level`.
pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "linkstream={},linkstream_api={},linkstream_core={}",
            log_level, log_level, log_level
        ))
    })
}

/// Installs a global subscriber for the given level. Does nothing if a subscriber is
/// already installed.
pub fn init_global_logger(log_level: String) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(get_log_env(log_level))
        .try_init();
}

pub fn global_info_logger() {
    init_global_logger("INFO".to_string())
}

pub fn global_debug_logger() {
    init_global_logger("DEBUG".to_string())
}

pub fn global_trace_logger() {
    init_global_logger("TRACE".to_string())
}

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl LoggingConfig {
    pub fn get_log_env(&self) -> EnvFilter {
        get_log_env(self.log_level.clone())
    }

    pub fn init(&self) {
        init_global_logger(self.log_level.clone())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "INFO".to_string(),
        }
    }
}
