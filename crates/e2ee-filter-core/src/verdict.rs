//! Verdicts returned to the host.

use crate::event::JsonObject;

/// Why an action was denied. Not an error: a designed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    SenderOrigin,
    RoomOrigin,
    PowerLevelDowngrade,
}

impl DenyReason {
    /// Human-readable reason, shown to the client where the host supports it.
    pub fn as_str(self) -> &'static str {
        match self {
            DenyReason::SenderOrigin => "sender origin denies e2ee",
            DenyReason::RoomOrigin => "room origin denies e2ee",
            DenyReason::PowerLevelDowngrade => "power-level downgrade denies e2ee lockout",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one evaluation. Terminal; never re-evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Allow,
    /// Allowed after rewriting; carries the content to use instead.
    AllowRewritten(JsonObject),
    Deny(DenyReason),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Verdict::Deny(_))
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Verdict::Deny(r) => Some(*r),
            _ => None,
        }
    }
}
