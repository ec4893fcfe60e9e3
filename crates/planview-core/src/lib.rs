//! planview-core: domain model and pure logic for the planview viewer.
//!
//! This crate holds everything the terminal layer renders from: token
//! records and their timing domains, the token-file loader, the custom
//! wildcard matcher and node filter, loop-iteration counting, and the
//! typed preferences store.

pub mod loops;
pub mod node_filter;
pub mod plan_source;
pub mod prefs;
pub mod token;
pub mod wildcard;

/// Crate identity label used for parity verification.
pub fn crate_label() -> &'static str {
    "planview-core"
}
