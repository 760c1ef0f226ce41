//! Room-creation guard.
//!
//! Never rejects: it strips `m.room.encryption` from the initial state and
//! holds the send threshold of the guarded event types at the floor.

use e2ee_filter_core::event::power_levels::{
    default_floor, minimal_content, raise_event_level, DEFAULT_FLOOR,
};
use e2ee_filter_core::event::{JsonObject, RoomCreationRequest, GUARDED_EVENT_TYPES};
use e2ee_filter_core::LOG_TARGET;

use crate::config::StripMode;

use super::denylist::DenyList;

#[derive(Debug, Clone, Copy)]
pub struct CreationOptions {
    pub strip: StripMode,
    pub enforce_floor: bool,
    /// Configured floor; `None` means `state_default + 1` of each source.
    pub floor: Option<i64>,
}

/// What the guard changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreationReport {
    /// Number of `m.room.encryption` entries removed.
    pub stripped: usize,
    /// A supplied power-levels source was raised.
    pub raised: bool,
    /// Power levels were synthesized because none were supplied.
    pub synthesized: bool,
}

impl CreationReport {
    pub fn changed(&self) -> bool {
        self.stripped > 0 || self.raised || self.synthesized
    }
}

pub fn guard(
    request: &mut RoomCreationRequest,
    deny_users: &DenyList,
    opts: &CreationOptions,
) -> CreationReport {
    let mut report = CreationReport::default();

    let strip = match opts.strip {
        StripMode::Always => true,
        StripMode::Never => false,
        StripMode::DeniedUsers => deny_users.denies(&request.requester, "requester"),
    };

    if strip && request.requests_encryption() {
        let before = request.initial_state.len();
        request.initial_state.retain(|ev| !ev.is_encryption());
        report.stripped = before - request.initial_state.len();
        tracing::info!(
            target: LOG_TARGET,
            requester = %request.requester,
            stripped = report.stripped,
            "stripped encryption from room creation request"
        );
    }

    if opts.enforce_floor {
        apply_floor(request, opts.floor, &mut report);
    }

    report
}

fn apply_floor(request: &mut RoomCreationRequest, floor: Option<i64>, report: &mut CreationReport) {
    if !request.has_power_levels() {
        let floor = floor.unwrap_or(DEFAULT_FLOOR);
        request.power_level_content_override = Some(minimal_content(floor));
        report.synthesized = true;
        tracing::debug!(target: LOG_TARGET, requester = %request.requester, floor, "synthesized power levels");
        return;
    }

    // Every supplied source is raised; the host may apply either.
    for ev in request.initial_state.iter_mut().filter(|ev| ev.is_power_levels()) {
        report.raised |= raise_floor(&mut ev.content, floor);
    }
    if let Some(content) = request.power_level_content_override.as_mut() {
        report.raised |= raise_floor(content, floor);
    }

    if report.raised {
        tracing::debug!(target: LOG_TARGET, requester = %request.requester, "raised power-level floor");
    }
}

fn raise_floor(content: &mut JsonObject, floor: Option<i64>) -> bool {
    let floor = floor.unwrap_or_else(|| default_floor(content));
    let mut changed = false;
    for ty in GUARDED_EVENT_TYPES {
        changed |= raise_event_level(content, ty, floor);
    }
    changed
}
