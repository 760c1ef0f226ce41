use e2ee_filter_core::error::{FilterError, Result};
use e2ee_filter_core::event::{Action, RoomCreationRequest, StateEventProposal};
use e2ee_filter_core::verdict::Verdict;
use e2ee_filter_core::LOG_TARGET;

use crate::config::FilterConfig;

use super::denylist::DenyList;
use super::room_creation::{self, CreationOptions, CreationReport};
use super::state_event::{self, StateEventOptions};

/// Immutable policy snapshot plus the entry points the host calls.
/// Construct once at startup, then share via Arc.
#[derive(Debug)]
pub struct PolicyEngine {
    deny_users: DenyList,
    deny_rooms: DenyList,
    creation: CreationOptions,
    state: StateEventOptions,
}

impl PolicyEngine {
    pub fn new(cfg: &FilterConfig) -> Result<Self> {
        cfg.validate()?;
        let deny_users = DenyList::compile(&cfg.deny_encryption_for_users_of)?;
        let deny_rooms = DenyList::compile(&cfg.deny_encryption_for_rooms_of)?;

        Ok(Self {
            deny_users,
            deny_rooms,
            creation: CreationOptions {
                strip: cfg.checks.strip_encryption_on_create,
                enforce_floor: cfg.checks.enforce_power_level_floor,
                floor: cfg.power_level_floor,
            },
            state: StateEventOptions {
                check_downgrades: cfg.checks.deny_power_level_downgrades,
                floor: cfg.power_level_floor,
            },
        })
    }

    pub fn deny_users(&self) -> &DenyList {
        &self.deny_users
    }

    pub fn deny_rooms(&self) -> &DenyList {
        &self.deny_rooms
    }

    /// Rewrite a creation request in place. Creation is never denied.
    pub fn guard_create_room(&self, request: &mut RoomCreationRequest) -> CreationReport {
        room_creation::guard(request, &self.deny_users, &self.creation)
    }

    /// Gate a proposed state event. Every deny is logged here.
    pub fn check_state_event(&self, proposal: &StateEventProposal) -> Verdict {
        let verdict =
            state_event::guard(proposal, &self.deny_users, &self.deny_rooms, &self.state);
        if let Verdict::Deny(reason) = &verdict {
            tracing::warn!(
                target: LOG_TARGET,
                room_id = %proposal.room_id,
                sender = %proposal.sender,
                event_type = %proposal.event_type,
                reason = %reason,
                "denied state event"
            );
        }
        verdict
    }

    /// Single entry point over both action kinds.
    ///
    /// A rewritten creation request comes back as `AllowRewritten` carrying
    /// the full request body.
    pub fn evaluate(&self, action: Action) -> Result<Verdict> {
        match action {
            Action::CreateRoom(mut request) => {
                if !self.guard_create_room(&mut request).changed() {
                    return Ok(Verdict::Allow);
                }
                match serde_json::to_value(&request) {
                    Ok(serde_json::Value::Object(body)) => Ok(Verdict::AllowRewritten(body)),
                    Ok(_) => Err(FilterError::Internal(
                        "request did not serialize to an object".into(),
                    )),
                    Err(e) => Err(FilterError::Internal(format!("serialize request failed: {e}"))),
                }
            }
            Action::StateEvent(proposal) => Ok(self.check_state_event(&proposal)),
        }
    }
}
