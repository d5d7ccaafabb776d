//! Functional core for the cycletrack backend.
//!
//! This crate contains the pure, I/O-free parts of the system: the cycle
//! domain model and its validation rules, the cache and storage trait
//! contracts, cache key construction, versioned cache serialization, and
//! session types. Concrete adapters (SQLite, Redis, in-memory) live in the
//! `cycletrack` service crate.

pub mod auth;
pub mod cache;
pub mod cycle;
pub mod storage;
