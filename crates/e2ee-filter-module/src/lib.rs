//! matrix-e2ee-filter policy module.
//!
//! Wires config loading, deny-list compilation, the room-creation and
//! state-event guards, and the host hook surface into one module. It is
//! consumed by host adapters, by the dry-run binary (`main.rs`), and by
//! integration tests.

pub mod config;
pub mod hooks;
pub mod policy;
