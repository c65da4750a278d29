//! The rule engine: guards, turn sequencing, orchestrated actions, and
//! legal-candidate enumeration.
//!
//! The guards are pure functions over [`crate::core::BoardSnapshot`]
//! values; the orchestrator in [`actions`] composes them in a fixed order
//! around the copy-on-write commit. Movement shape itself is intrinsic to
//! [`crate::core::Movement`], which carries its legality rule.

pub mod actions;
pub mod adjacency;
pub mod bounds;
pub mod encirclement;
pub mod legal;
pub mod turn;

pub use actions::ActionOutcome;
pub use turn::TurnState;
