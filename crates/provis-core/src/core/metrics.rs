//! Structural metrics over atom collections.
//!
//! Every function reads a borrowed atom collection, preserves its order, and
//! never mutates it. Degenerate inputs resolve to defined defaults: the
//! origin for an empty center of mass, 0.0 for an empty or single-atom
//! radius of gyration, empty vectors for filters with no match.

use super::geometry::bounds::BoundingBox;
use super::geometry::kernel;
use super::models::atom::{Atom, AtomRole};
use super::models::ids::{ChainId, ResidueId};
use nalgebra::Point3;

/// Positions of the given atoms, in order.
pub fn positions(atoms: &[&Atom]) -> Vec<Point3<f64>> {
    atoms.iter().map(|atom| atom.position).collect()
}

/// Unweighted positional mean of the atoms (equal-mass approximation).
///
/// The origin for an empty collection.
pub fn center_of_mass(atoms: &[&Atom]) -> Point3<f64> {
    kernel::centroid(&positions(atoms))
}

/// Root-mean-square distance of the atoms from their center of mass.
///
/// 0.0 for an empty collection and for a single atom.
pub fn radius_of_gyration(atoms: &[&Atom]) -> f64 {
    if atoms.is_empty() {
        return 0.0;
    }
    let com = center_of_mass(atoms);
    let mean_sq = atoms
        .iter()
        .map(|atom| (atom.position - com).norm_squared())
        .sum::<f64>()
        / atoms.len() as f64;
    mean_sq.sqrt()
}

/// Axis-aligned bounding box of the atoms; the all-zero box when empty.
pub fn bounding_box(atoms: &[&Atom]) -> BoundingBox {
    BoundingBox::from_points(&positions(atoms))
}

/// Atoms belonging to the given chain, in input order.
pub fn atoms_by_chain<'a>(atoms: &[&'a Atom], chain_id: ChainId) -> Vec<&'a Atom> {
    atoms
        .iter()
        .filter(|atom| atom.chain_id == chain_id)
        .copied()
        .collect()
}

/// Atoms belonging to the given residue, in input order.
pub fn atoms_by_residue<'a>(atoms: &[&'a Atom], residue_id: ResidueId) -> Vec<&'a Atom> {
    atoms
        .iter()
        .filter(|atom| atom.residue_id == residue_id)
        .copied()
        .collect()
}

/// Backbone atoms, in input order.
pub fn backbone_atoms<'a>(atoms: &[&'a Atom]) -> Vec<&'a Atom> {
    atoms
        .iter()
        .filter(|atom| atom.role == AtomRole::Backbone)
        .copied()
        .collect()
}

/// Sidechain atoms, in input order.
pub fn sidechain_atoms<'a>(atoms: &[&'a Atom]) -> Vec<&'a Atom> {
    atoms
        .iter()
        .filter(|atom| atom.role == AtomRole::Sidechain)
        .copied()
        .collect()
}
