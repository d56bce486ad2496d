use crate::core::models::atom::AtomRole;
use phf::{Set, phf_set};

static BACKBONE_ATOM_NAMES: Set<&'static str> = phf_set! {
    "N", "H", "HN", "CA", "HA", "C", "O", "OXT", "H1", "H2", "H3",
    "HT1", "HT2", "HT3", "OT1", "OT2", "HA1", "HA2", "1HA", "2HA",
};

pub fn is_backbone_atom(atom_name: &str) -> bool {
    BACKBONE_ATOM_NAMES.contains(atom_name.trim())
}

/// Classifies an atom in a protein residue by its name.
///
/// Anything not in the backbone name table is taken to be part of the side
/// group; callers decide whether the residue is part of a protein chain at
/// all before asking.
pub fn classify_atom_role(atom_name: &str) -> AtomRole {
    if is_backbone_atom(atom_name) {
        AtomRole::Backbone
    } else {
        AtomRole::Sidechain
    }
}
