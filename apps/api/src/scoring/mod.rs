//! The scoring engine: pure, synchronous, deterministic.
//!
//! Every sub-scorer takes already-extracted records and returns bounded
//! counts or percentages. No I/O, no shared mutable state — safe to run
//! concurrently across requests without locking.

pub mod ats;
pub mod composite;
pub mod document;
pub mod engine;
pub mod handlers;
pub mod lexical;
pub mod recruiter;
pub mod skills;
