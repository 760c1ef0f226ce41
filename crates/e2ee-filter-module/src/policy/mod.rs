//! Policy layer (deny-lists, creation and state-event guards).
//!
//! Compiles the filter configuration into an immutable engine that host
//! hooks consult once per room creation and once per proposed state event.

pub mod denylist;
pub mod engine;
pub mod room_creation;
pub mod state_event;

pub use denylist::DenyList;
pub use engine::PolicyEngine;
pub use room_creation::CreationReport;
