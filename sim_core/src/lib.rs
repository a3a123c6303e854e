//! sim_core - Slaying sessions on top of the loot engine
//!
//! This library provides:
//! - Simulator: slays single monsters or batches and tallies what dropped
//! - LootSession: per-session kill and treasure counts
//! - EventBus: synchronous notifications for front ends

pub mod events;
pub mod session;
pub mod simulator;

pub use events::{EventBus, SimEvent};
pub use session::{LootSession, TreasureCounts};
pub use simulator::Simulator;

use tables_core::LookupError;
use thiserror::Error;

/// Error running a slaying session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("No monsters loaded to pick from")]
    NoMonsters,
}
