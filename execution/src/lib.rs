//! Plunder execution layer.
//!
//! This crate contains the command execution logic ([`Engine`]) and the
//! round state machines used by the driver.
//!
//! ## Concurrency model
//! Single-threaded and event-driven: every command runs to completion
//! against `&mut Engine` before the next is handled. There is no locking
//! around the persistent store; a process that shares one store file with
//! another writer can lose updates. Hardened deployments should wrap the
//! store behind a backend that serializes per-user read-modify-write.
//!
//! ## Determinism requirements
//! - Do not read wall-clock time inside execution; callers pass `now`.
//! - Randomness comes only from the engine RNG, which is seedable for
//!   reproducible runs.
//!
//! ## Settlement invariant
//! Interactive rounds hold no funds while open. Balances move only at a
//! terminal transition (bust, cash-out, duel settlement); an expired round
//! leaves every balance untouched.

pub mod games;
pub mod leveling;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;


mod engine;
mod state;
mod store;

pub use engine::{Engine, EngineConfig, Round};
pub use state::{Memory, Store};
pub use store::JsonStore;
