//! # Workflows Module
//!
//! High-level, memoized analysis entry points — the public API the host
//! application calls per visualization or analysis request.
//!
//! ## Overview
//!
//! Each workflow follows the same control flow: build a cache key from the
//! structure's identity and the operation's parameters, return the cached
//! artifact on a hit, otherwise run the pure computations from
//! [`core`](crate::core), store the result with an estimated size, and
//! return it as a plain serializable value for the rendering or export
//! layer.
//!
//! ## Key Components
//!
//! - **Analysis Workflows** ([`analyze`]) - Sequence analysis, hydropathy
//!   profiles, and structural metrics, memoized through a
//!   [`MemoryCache`](crate::engine::cache::MemoryCache) of
//!   [`Artifact`](analyze::Artifact) values.

pub mod analyze;
