#![forbid(unsafe_code)]

//! Portfolio section configuration.
//!
//! The five-section registry is loaded from an embedded JSON blob rather
//! than hard-coded, exercising the serde path a config-driven host would
//! use.

use std::sync::Arc;

use scrollpoint_core::registry::{CheckpointDescriptor, CheckpointRegistry};

const SECTIONS_JSON: &str = include_str!("sections.json");

/// Build the portfolio registry from the embedded section config.
///
/// # Panics
///
/// Panics when the embedded config is malformed or violates a registry
/// invariant; both are build-time bugs in this binary.
pub fn portfolio_registry() -> Arc<CheckpointRegistry> {
    let entries: Vec<CheckpointDescriptor> =
        serde_json::from_str(SECTIONS_JSON).expect("embedded section config must parse");
    Arc::new(CheckpointRegistry::new(entries).expect("embedded section config must validate"))
}
