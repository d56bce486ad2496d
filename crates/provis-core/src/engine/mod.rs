//! # Engine Module
//!
//! The stateful resource layer of Provis: the memory-aware cache and its
//! supporting machinery.
//!
//! ## Overview
//!
//! Interactive exploration recomputes the same derived analyses over and
//! over; the engine keeps them available under an explicit memory budget.
//! Cached entries are keyed by a caller-chosen identity, accounted by a
//! best-effort size estimate, and evicted in strict least-recently-used
//! order when the total exceeds the budget.
//!
//! ## Key Components
//!
//! - **Configuration** ([`config`]) - Cache budget and pressure threshold,
//!   with a validating builder and TOML deserialization
//! - **Cache** ([`cache`]) - The size-budgeted LRU store, in single-owner
//!   and mutex-synchronized variants
//! - **Size Estimation** ([`estimate`]) - Best-effort deep byte estimates
//!   for cached values
//! - **Memory Signal** ([`memory`]) - The host-reported heap usage consumed
//!   by the advisory pressure check
//!
//! Cache state (the key→entry map, total-size counter, and recency
//! bookkeeping) forms one shared mutable resource; `SharedMemoryCache`
//! covers all operations on it with a single mutual-exclusion boundary for
//! concurrent hosts.

pub mod cache;
pub mod config;
pub mod estimate;
pub mod memory;
