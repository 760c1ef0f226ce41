//! Host hook surface.
//!
//! The host calls `on_create_room` before a room exists (may rewrite, never
//! rejects) and `check_event_allowed` before persisting a state event. Hooks
//! are async to fit host event pipelines; evaluation itself never awaits.

use std::sync::Arc;

use async_trait::async_trait;

use e2ee_filter_core::error::Result;
use e2ee_filter_core::event::{RoomCreationRequest, StateEventProposal};
use e2ee_filter_core::verdict::Verdict;
use e2ee_filter_core::LOG_TARGET;

use crate::config::{self, FilterConfig};
use crate::policy::PolicyEngine;

/// Third-party event rules a host can register.
#[async_trait]
pub trait ThirdPartyRules: Send + Sync {
    fn name(&self) -> &'static str;
    async fn on_create_room(&self, request: &mut RoomCreationRequest);
    async fn check_event_allowed(&self, proposal: &StateEventProposal) -> Verdict;
}

/// Rules module that keeps encryption off for deny-listed origins.
pub struct EncryptedRoomFilter {
    engine: Arc<PolicyEngine>,
}

impl EncryptedRoomFilter {
    pub fn new(engine: Arc<PolicyEngine>) -> Self {
        Self { engine }
    }

    pub fn from_config(cfg: &FilterConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(PolicyEngine::new(cfg)?)))
    }

    /// Build from the config object the host passes at module load.
    pub fn from_value(v: serde_json::Value) -> Result<Self> {
        Self::from_config(&config::load_from_value(v)?)
    }

    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    pub fn register(self, registry: &mut RulesRegistry) {
        tracing::info!(
            target: LOG_TARGET,
            users_of = ?self.engine.deny_users().origins(),
            rooms_of = ?self.engine.deny_rooms().origins(),
            "deny lists loaded"
        );
        registry.register(Arc::new(self));
    }
}

#[async_trait]
impl ThirdPartyRules for EncryptedRoomFilter {
    fn name(&self) -> &'static str {
        "encrypted_room_filter"
    }

    async fn on_create_room(&self, request: &mut RoomCreationRequest) {
        self.engine.guard_create_room(request);
    }

    async fn check_event_allowed(&self, proposal: &StateEventProposal) -> Verdict {
        self.engine.check_state_event(proposal)
    }
}

/// Registered rules modules, applied in registration order.
#[derive(Default)]
pub struct RulesRegistry {
    modules: Vec<Arc<dyn ThirdPartyRules>>,
}

impl RulesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, module: Arc<dyn ThirdPartyRules>) {
        tracing::info!(target: LOG_TARGET, module = module.name(), "registered third-party rules module");
        self.modules.push(module);
    }

    pub fn registered(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    /// Every module sees the request as rewritten by the ones before it.
    pub async fn on_create_room(&self, request: &mut RoomCreationRequest) {
        for module in &self.modules {
            module.on_create_room(request).await;
        }
    }

    /// First verdict other than `Allow` wins.
    pub async fn check_event_allowed(&self, proposal: &StateEventProposal) -> Verdict {
        for module in &self.modules {
            let verdict = module.check_event_allowed(proposal).await;
            if verdict != Verdict::Allow {
                return verdict;
            }
        }
        Verdict::Allow
    }
}
