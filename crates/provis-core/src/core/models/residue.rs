use super::ids::{AtomId, ChainId};
use crate::core::chemistry::properties::AminoAcid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub number: isize,             // Residue sequence number from source file
    pub name: String,              // Name of the residue (e.g., "ALA", "GLY")
    pub amino_acid: AminoAcid,     // Canonical residue type; Unknown for non-standard residues
    pub chain_id: ChainId,         // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>, // Ordered IDs of atoms belonging to this residue
}

impl Residue {
    pub(crate) fn new(number: isize, name: &str, amino_acid: AminoAcid, chain_id: ChainId) -> Self {
        Self {
            number,
            name: name.to_string(),
            amino_acid,
            chain_id,
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_id: AtomId) {
        self.atoms.push(atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_chain_id(n: u64) -> ChainId {
        ChainId::from(KeyData::from_ffi(n))
    }

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let chain_id = dummy_chain_id(1);
        let residue = Residue::new(10, "GLY", AminoAcid::Glycine, chain_id);
        assert_eq!(residue.number, 10);
        assert_eq!(residue.name, "GLY");
        assert_eq!(residue.amino_acid, AminoAcid::Glycine);
        assert_eq!(residue.chain_id, chain_id);
        assert!(residue.atoms().is_empty());
    }

    #[test]
    fn add_atom_preserves_insertion_order() {
        let mut residue = Residue::new(5, "ALA", AminoAcid::Alanine, dummy_chain_id(2));
        let a1 = dummy_atom_id(1);
        let a2 = dummy_atom_id(2);
        residue.add_atom(a1);
        residue.add_atom(a2);
        assert_eq!(residue.atoms(), &[a1, a2]);
    }
}
