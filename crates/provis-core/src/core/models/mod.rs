//! # Core Models Module
//!
//! Data structures representing a parsed protein structure as consumed by the
//! analysis engine.
//!
//! ## Overview
//!
//! The models form a read-only snapshot contract: an external loader (PDB,
//! mmCIF, or the REST backend — none of which live in this crate) builds a
//! [`structure::ProteinStructure`] once, and every computation in the engine
//! reads it without mutation. The models are designed to:
//!
//! - **Represent molecular structure** - Atomic coordinates, residue and
//!   chain organization, and per-atom classification
//! - **Support efficient queries** - Arena storage with stable ids and
//!   lookup maps for chains and residues
//! - **Maintain type safety** - Strongly typed ids for atoms, residues, and
//!   chains
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with coordinates, element, and role
//! - [`residue`] - Amino-acid residue and its ordered atoms
//! - [`chain`] - Chain organization and classification
//! - [`structure`] - The complete structure snapshot
//! - [`ids`] - Stable identifier types

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod structure;
