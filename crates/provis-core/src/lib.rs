//! # Provis Core Library
//!
//! The memory-bounded structural and chemical computation engine behind the
//! Provis protein visualization application.
//!
//! During interactive exploration the host application repeatedly re-derives
//! the same analyses (composition, hydropathy profiles, structural metrics)
//! over structures with thousands of atoms. This crate provides those
//! deterministic numeric routines together with a size-budgeted cache so
//! derived results stay available without exceeding a bounded memory budget.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Stateless data models
//!   (`ProteinStructure`), the static amino-acid property table, and pure
//!   geometry, chemistry, and structural-metric functions. Everything here is
//!   side-effect-free and safely callable from any number of concurrent
//!   callers.
//!
//! - **[`engine`]: The Resource Core.** The stateful layer — the
//!   memory-aware LRU cache, value size estimation, the host heap signal,
//!   and engine configuration. Cache state is either single-owner
//!   (`MemoryCache`) or protected by one mutual-exclusion boundary
//!   (`SharedMemoryCache`).
//!
//! - **[`workflows`]: The Public API.** Memoized analysis entry points that
//!   tie `core` and `engine` together: ask the cache, compute on miss, store
//!   with an estimated size, return a plain serializable value.
//!
//! The engine does not parse file formats, perform network I/O, render
//! pixels, or manage UI state; parsed structures are supplied by the host and
//! consumed read-only.

pub mod core;
pub mod engine;
pub mod workflows;
