//! State-event guard.
//!
//! Encryption can be switched on directly (`m.room.encryption`) or by first
//! weakening power levels so an unprivileged member can send it. Both paths
//! are checked here. Rules run in order; the first match wins.

use e2ee_filter_core::event::power_levels::{
    required_for_state, users_default, DEFAULT_FLOOR, DEFAULT_USERS_DEFAULT,
};
use e2ee_filter_core::event::{
    StateEventProposal, ENCRYPTION, GUARDED_EVENT_TYPES, POWER_LEVELS,
};
use e2ee_filter_core::verdict::{DenyReason, Verdict};

use super::denylist::DenyList;

#[derive(Debug, Clone, Copy)]
pub struct StateEventOptions {
    pub check_downgrades: bool,
    /// Configured floor; `None` means [`DEFAULT_FLOOR`]. Never read from room
    /// content, which members holding power-level rights can rewrite.
    pub floor: Option<i64>,
}

pub fn guard(
    proposal: &StateEventProposal,
    deny_users: &DenyList,
    deny_rooms: &DenyList,
    opts: &StateEventOptions,
) -> Verdict {
    match proposal.event_type.as_str() {
        ENCRYPTION => {
            if deny_users.denies(&proposal.sender, "sender") {
                return Verdict::Deny(DenyReason::SenderOrigin);
            }
            if deny_rooms.denies(&proposal.room_id, "room") {
                return Verdict::Deny(DenyReason::RoomOrigin);
            }
            Verdict::Allow
        }
        POWER_LEVELS if opts.check_downgrades && is_room_state(proposal) => {
            if !weakens_encryption_gate(proposal, opts.floor) {
                return Verdict::Allow;
            }
            let room_denied = deny_rooms.denies(&proposal.room_id, "room");
            let creator_denied = proposal
                .room_creator
                .as_deref()
                .is_some_and(|creator| deny_users.denies(creator, "creator"));
            if room_denied || creator_denied {
                Verdict::Deny(DenyReason::PowerLevelDowngrade)
            } else {
                Verdict::Allow
            }
        }
        _ => Verdict::Allow,
    }
}

fn is_room_state(proposal: &StateEventProposal) -> bool {
    proposal.state_key.as_deref().unwrap_or("").is_empty()
}

/// True if the proposed levels would let more users enable encryption.
///
/// A guarded threshold counts as weakened when it drops below the floor and
/// below its current value; without current levels the floor alone decides.
/// Raising `users_default` to the encryption threshold opens it to everyone.
fn weakens_encryption_gate(proposal: &StateEventProposal, floor: Option<i64>) -> bool {
    let next = &proposal.content;
    let prior = proposal.prior_power_levels.as_ref();
    let floor = floor.unwrap_or(DEFAULT_FLOOR);

    let lowered = GUARDED_EVENT_TYPES.iter().any(|ty| {
        let required = required_for_state(next, ty);
        let current = prior.map(|c| required_for_state(c, ty));
        required < floor && current.map_or(true, |c| required < c)
    });
    if lowered {
        return true;
    }

    let next_default = users_default(next);
    let prior_default = prior.map_or(DEFAULT_USERS_DEFAULT, users_default);
    next_default > prior_default && next_default >= required_for_state(next, ENCRYPTION)
}
