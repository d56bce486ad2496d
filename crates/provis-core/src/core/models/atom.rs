use super::ids::{ChainId, ResidueId};
use nalgebra::Point3;
use std::str::FromStr;

/// Represents the role or classification of an atom within a protein
/// structure.
///
/// This enum distinguishes atoms of the repeating main chain from the
/// residue-specific side groups, which is what the structural metrics and
/// visualization filters select on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AtomRole {
    /// Backbone atom, part of the repeating main chain (e.g., N, CA, C, O).
    Backbone,
    /// Sidechain atom, part of the side group attached to the backbone.
    Sidechain,
    /// Unclassified atom role (ligands, waters, unrecognized names).
    #[default]
    Other,
}

/// Represents an atom in a protein structure.
///
/// Atoms are owned by the caller-supplied [`ProteinStructure`] and are read,
/// never mutated, by the engine's computations.
///
/// [`ProteinStructure`]: super::structure::ProteinStructure
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Source-file serial number of the atom.
    pub serial: u32,
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The element symbol (e.g., "C", "N", "Fe").
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The ID of the chain the parent residue belongs to.
    pub chain_id: ChainId,
    /// The role of the atom in the structure.
    pub role: AtomRole,
}

impl Atom {
    /// Creates a new `Atom` with default values for the ancillary fields.
    ///
    /// The element and role are left at their defaults and can be set by the
    /// loader afterwards; [`ProteinStructure::add_atom_to_residue`] classifies
    /// the role from the atom name when it is still [`AtomRole::Other`].
    ///
    /// [`ProteinStructure::add_atom_to_residue`]: super::structure::ProteinStructure::add_atom_to_residue
    pub fn new(
        serial: u32,
        name: &str,
        residue_id: ResidueId,
        chain_id: ChainId,
        position: Point3<f64>,
    ) -> Self {
        Self {
            serial,
            name: name.to_string(),
            element: String::new(),
            position,
            residue_id,
            chain_id,
            role: AtomRole::default(),
        }
    }
}

impl FromStr for AtomRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backbone" => Ok(AtomRole::Backbone),
            "sidechain" | "side-chain" | "side_chain" => Ok(AtomRole::Sidechain),
            "other" | "unknown" => Ok(AtomRole::Other),
            _ => Err(()),
        }
    }
}
