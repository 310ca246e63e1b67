//! Conversation-scoped state for the jyotish core.
//!
//! This crate provides:
//! - [`CurrentStateService`]: transits and the active dasha chain for a
//!   chart at "now", with the clock injected
//! - [`SessionCache`]: one snapshot per session id, reused until it goes
//!   stale or the session's chart changes

pub mod cache;
pub mod current;
pub mod error;

pub use cache::{DEFAULT_STALENESS, SessionCache, SessionSnapshot};
pub use current::{CurrentSnapshot, CurrentStateService};
pub use error::SessionError;
