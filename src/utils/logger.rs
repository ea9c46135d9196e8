//! Tracing setup for the two binaries. Logs always go to stderr so that
//! `apply-filter` can print its JSON result on stdout untouched.

use crate::utils::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::{fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGET: &str = "itc_filters";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 一行一筆，給人看
    #[default]
    Compact,
    /// 給機器讀取
    Json,
}

impl LogFormat {
    pub fn name(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(FilterError::invalid_value(
                "log_format",
                other,
                "expected compact or json",
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Filter used when `RUST_LOG` is unset. JSON output is for scripts, so it
/// stays quiet unless asked for more.
pub fn default_directive(format: LogFormat, verbose: bool) -> String {
    match (format, verbose) {
        (_, true) => format!("{}=debug,info", CRATE_TARGET),
        (LogFormat::Compact, false) => format!("{}=info", CRATE_TARGET),
        (LogFormat::Json, false) => format!("{}=warn", CRATE_TARGET),
    }
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_logger(format: LogFormat, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(format, verbose)));

    let layer = log_fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };

    installed.map_err(|e| FilterError::ProcessingError {
        message: format!("logger already initialised: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(LogFormat::Compact, false), "itc_filters=info");
        assert_eq!(default_directive(LogFormat::Json, false), "itc_filters=warn");
        assert_eq!(default_directive(LogFormat::Json, true), "itc_filters=debug,info");
        assert!(EnvFilter::try_new(default_directive(LogFormat::Compact, true)).is_ok());
    }

    #[test]
    fn test_log_format_names() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("pretty".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::default().to_string(), "compact");
        assert_eq!(serde_json::to_string(&LogFormat::Json).unwrap(), "\"json\"");
    }

    #[test]
    fn test_second_init_is_an_error() {
        // 第一次可能已被其他測試設定，只確認第二次一定失敗
        let _ = init_logger(LogFormat::Compact, false);
        assert!(matches!(
            init_logger(LogFormat::Json, false),
            Err(FilterError::ProcessingError { .. })
        ));
    }
}
