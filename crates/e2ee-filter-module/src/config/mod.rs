//! Filter config loader (strict parsing).

pub mod schema;

use std::fs;

use e2ee_filter_core::error::{FilterError, Result};

pub use schema::{ChecksSection, FilterConfig, StripMode};

pub fn load_from_file(path: &str) -> Result<FilterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FilterError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<FilterConfig> {
    let cfg: FilterConfig = serde_yaml::from_str(s)
        .map_err(|e| FilterError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from a config object handed over by the host.
pub fn load_from_value(v: serde_json::Value) -> Result<FilterConfig> {
    let cfg: FilterConfig = serde_json::from_value(v)
        .map_err(|e| FilterError::Config(format!("invalid config object: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
