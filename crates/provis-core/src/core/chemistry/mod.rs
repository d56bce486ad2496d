//! # Sequence Chemistry Engine
//!
//! Pure functions over one-letter amino-acid sequences and a static
//! per-residue property table.
//!
//! ## Key Components
//!
//! - [`properties`] - The closed [`AminoAcid`](properties::AminoAcid)
//!   enumeration, the immutable property table (masses, hydropathy, charge,
//!   polarity, category), and residue-code conversions
//! - [`sequence`] - Composition, molecular weight, windowed hydropathy
//!   profiles, charge distribution, and isoelectric point
//!
//! Unrecognized residue codes are data, not errors: they map to the
//! `Unknown` sentinel (`X` / `UNK`) and contribute zero to every numeric
//! property.

pub mod properties;
pub mod sequence;
