use serde::Deserialize;

use e2ee_filter_core::error::{FilterError, Result};
use e2ee_filter_core::identifier::ServerName;

/// Highest floor accepted; the room creator holds 100 by default.
pub const MAX_POWER_LEVEL_FLOOR: i64 = 100;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Origins whose users may not enable encryption.
    #[serde(default)]
    pub deny_encryption_for_users_of: Vec<String>,

    /// Origins whose rooms may not have encryption enabled.
    #[serde(default)]
    pub deny_encryption_for_rooms_of: Vec<String>,

    /// Explicit level required to send `m.room.encryption` and
    /// `m.room.power_levels`. Defaults to `state_default + 1`.
    #[serde(default)]
    pub power_level_floor: Option<i64>,

    #[serde(default)]
    pub checks: ChecksSection,
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        validate_origins("deny_encryption_for_users_of", &self.deny_encryption_for_users_of)?;
        validate_origins("deny_encryption_for_rooms_of", &self.deny_encryption_for_rooms_of)?;

        if let Some(floor) = self.power_level_floor {
            if !(1..=MAX_POWER_LEVEL_FLOOR).contains(&floor) {
                return Err(FilterError::Config(format!(
                    "power_level_floor must be between 1 and {MAX_POWER_LEVEL_FLOOR}"
                )));
            }
        }

        Ok(())
    }
}

fn validate_origins(field: &str, raw: &[String]) -> Result<()> {
    for (i, s) in raw.iter().enumerate() {
        ServerName::parse(s)
            .map_err(|e| FilterError::Config(format!("{field}[{i}]: {e}")))?;
    }
    Ok(())
}

/// Which creation requests lose their `m.room.encryption` initial state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripMode {
    /// Only requesters whose origin is deny-listed.
    #[default]
    DeniedUsers,
    /// Every request.
    Always,
    Never,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecksSection {
    #[serde(default)]
    pub strip_encryption_on_create: StripMode,

    #[serde(default = "default_true")]
    pub enforce_power_level_floor: bool,

    #[serde(default = "default_true")]
    pub deny_power_level_downgrades: bool,
}

impl Default for ChecksSection {
    fn default() -> Self {
        Self {
            strip_encryption_on_create: StripMode::default(),
            enforce_power_level_floor: default_true(),
            deny_power_level_downgrades: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
