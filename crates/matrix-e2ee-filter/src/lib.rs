//! Top-level facade crate for matrix-e2ee-filter.
//!
//! Re-exports core types and the policy module so hosts can depend on a single crate.

pub mod core {
    pub use e2ee_filter_core::*;
}

pub mod module {
    pub use e2ee_filter_module::*;
}
