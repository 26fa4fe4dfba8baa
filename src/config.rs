use std::time::Duration;

use crate::cli::LookupArgs;
use crate::lookup::LookupConfig;

/// Default log filter: quiet enough not to interleave with prompts.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

impl LogConfig {
    /// `RUST_LOG` for the filter, `LOG_FORMAT=json` for JSON lines.
    pub fn from_env() -> Self {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        let json = std::env::var("LOG_FORMAT")
            .map(|v| v == "json")
            .unwrap_or(false);
        Self { filter, json }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub lookup: LookupConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_args(lookup: &LookupArgs) -> Self {
        Self {
            lookup: lookup_config(lookup),
            log: LogConfig::from_env(),
        }
    }
}

/// Blank credentials count as missing.
pub fn lookup_config(args: &LookupArgs) -> LookupConfig {
    let non_blank = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    LookupConfig {
        endpoint: args.endpoint.clone(),
        app_id: non_blank(&args.app_id),
        app_key: non_blank(&args.app_key),
        timeout: Duration::from_secs(args.timeout_secs.max(1)),
    }
}
