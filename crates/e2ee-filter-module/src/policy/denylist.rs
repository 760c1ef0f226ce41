//! Deny-list compilation and origin matching.
//!
//! Entries are server names (`example.org`, `example.org:8448`, `[::1]`),
//! matched case-insensitively and exactly: a port is part of the label.

use std::collections::HashSet;

use e2ee_filter_core::error::{FilterError, Result};
use e2ee_filter_core::identifier::{origin_of, ServerName};
use e2ee_filter_core::LOG_TARGET;

/// Compiled set of denied origins. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct DenyList {
    origins: HashSet<ServerName>,
}

impl DenyList {
    pub fn compile(raw: &[String]) -> Result<Self> {
        let mut origins = HashSet::with_capacity(raw.len());
        for s in raw {
            let origin = ServerName::parse(s)
                .map_err(|e| FilterError::Config(format!("invalid deny-list entry {s:?}: {e}")))?;
            origins.insert(origin);
        }
        Ok(Self { origins })
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_denied(&self, origin: &ServerName) -> bool {
        self.origins.contains(origin)
    }

    /// Extract the origin of `id` and test it.
    ///
    /// A malformed identifier is never deniable: it is logged and the check
    /// takes its permissive branch. `role` names the identifier in the log.
    pub fn denies(&self, id: &str, role: &'static str) -> bool {
        if self.origins.is_empty() {
            return false;
        }
        match origin_of(id) {
            Ok(origin) => self.is_denied(&origin),
            Err(e) => {
                tracing::warn!(
                    target: LOG_TARGET,
                    identifier = %id,
                    role,
                    error = %e,
                    "cannot extract origin; treating as not denied"
                );
                false
            }
        }
    }

    /// Origins in sorted order, for logs.
    pub fn origins(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.origins.iter().map(ServerName::as_str).collect();
        v.sort_unstable();
        v
    }
}
