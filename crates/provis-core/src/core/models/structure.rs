use super::atom::{Atom, AtomRole};
use super::chain::{Chain, ChainType};
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::Residue;
use crate::core::chemistry::properties::AminoAcid;
use crate::core::utils::identifiers::classify_atom_role;
use slotmap::SlotMap;
use std::collections::HashMap;

/// A complete protein structure with atoms, residues, and chains.
///
/// This is the read-only snapshot contract between the host application's
/// loader and the analysis engine: the loader builds the structure once, and
/// every computation reads it without mutation for the duration of the call.
/// The `id` is the caller-chosen identity used to key cached analysis
/// results.
#[derive(Debug, Clone, Default)]
pub struct ProteinStructure {
    /// Caller-chosen identity of the structure (e.g., a PDB code or database id).
    id: String,
    /// Human-readable name of the structure.
    name: String,
    /// Primary storage for atoms using a slot map for stable ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for stable ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for stable ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Lookup map for finding residues by chain ID and residue number.
    residue_id_map: HashMap<(ChainId, isize), ResidueId>,
    /// Lookup map for finding chains by their single-character identifier.
    chain_id_map: HashMap<char, ChainId>,
}

impl ProteinStructure {
    /// Creates a new, empty structure with the given identity.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// The caller-chosen identity of the structure.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-readable name of the structure.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Retrieves an immutable reference to an atom by its ID.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns an iterator over all atoms in insertion order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Retrieves an immutable reference to a residue by its ID.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Returns an iterator over all residues in insertion order.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all chains in insertion order.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chains.iter()
    }

    /// The number of atoms in the structure.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Finds a chain ID by its single-character identifier.
    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    /// Finds a residue ID by its chain ID and residue number.
    pub fn find_residue_by_number(
        &self,
        chain_id: ChainId,
        residue_number: isize,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number))
            .copied()
    }

    /// Adds a new chain to the structure or returns the existing one.
    ///
    /// This method is idempotent; if a chain with the given identifier
    /// already exists, its ID is returned without creating a duplicate.
    pub fn add_chain(&mut self, id: char, chain_type: ChainType) -> ChainId {
        *self.chain_id_map.entry(id).or_insert_with(|| {
            let chain = Chain::new(id, chain_type);
            self.chains.insert(chain)
        })
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// Idempotent on `(chain_id, residue_number)`. Returns `None` if the
    /// chain does not exist.
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        name: &str,
        amino_acid: AminoAcid,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, name, amino_acid, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// The atom's `residue_id` and `chain_id` are set to the parent residue's
    /// ids. An atom still carrying the default [`AtomRole::Other`] in a
    /// protein chain is classified from its name. Returns `None` if the
    /// residue does not exist.
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        let residue = self.residues.get(residue_id)?;
        let chain_id = residue.chain_id;

        atom.residue_id = residue_id;
        atom.chain_id = chain_id;
        if atom.role == AtomRole::Other
            && self
                .chains
                .get(chain_id)
                .is_some_and(|c| c.chain_type == ChainType::Protein)
        {
            atom.role = classify_atom_role(&atom.name);
        }

        let atom_id = self.atoms.insert(atom);
        let residue = self.residues.get_mut(residue_id)?;
        residue.add_atom(atom_id);
        Some(atom_id)
    }

    /// Returns an iterator over atoms with a specific role.
    pub fn atoms_by_role(&self, role: AtomRole) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter().filter(move |(_, atom)| atom.role == role)
    }

    /// Derives the one-letter amino-acid sequence of the structure.
    ///
    /// Chains are visited in insertion order and each residue contributes its
    /// one-letter code (`X` for non-standard residues). Non-protein chains
    /// are skipped.
    pub fn sequence(&self) -> String {
        self.chains
            .iter()
            .filter(|(_, chain)| chain.chain_type == ChainType::Protein)
            .flat_map(|(_, chain)| chain.residues.iter())
            .filter_map(|&residue_id| self.residues.get(residue_id))
            .map(|residue| residue.amino_acid.one_letter())
            .collect()
    }
}
