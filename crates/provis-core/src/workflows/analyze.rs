use crate::core::chemistry::sequence::{
    self, Composition, IsoelectricPoint,
};
use crate::core::geometry::bounds::BoundingBox;
use crate::core::metrics;
use crate::core::models::atom::Atom;
use crate::core::models::structure::ProteinStructure;
use crate::engine::cache::MemoryCache;
use crate::engine::estimate::EstimateSize;
use nalgebra::Point3;
use serde::Serialize;
use std::mem;
use tracing::instrument;

/// Chemical analysis of a structure's sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceAnalysis {
    pub composition: Composition,
    pub molecular_weight: f64,
    pub charge_distribution: Vec<i8>,
    pub isoelectric_point: IsoelectricPoint,
}

/// Geometric metrics of a structure (or one of its chains).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureMetrics {
    pub center_of_mass: Point3<f64>,
    pub radius_of_gyration: f64,
    pub bounding_box: BoundingBox,
    pub atom_count: usize,
}

/// A cacheable analysis product.
///
/// Workflow results of different shapes share one cache, so each result is
/// wrapped in this enum. A key that unexpectedly holds the wrong variant is
/// treated as a miss — the workflow recomputes and overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Artifact {
    Sequence(SequenceAnalysis),
    Hydropathy(Vec<f64>),
    Structure(StructureMetrics),
}

impl EstimateSize for SequenceAnalysis {
    fn estimated_bytes(&self) -> usize {
        self.composition.estimated_bytes()
            + mem::size_of::<f64>()
            + self.charge_distribution.estimated_bytes()
            + self.isoelectric_point.estimated_bytes()
    }
}

impl EstimateSize for StructureMetrics {
    fn estimated_bytes(&self) -> usize {
        mem::size_of::<Self>()
    }
}

impl EstimateSize for Artifact {
    fn estimated_bytes(&self) -> usize {
        let payload = match self {
            Artifact::Sequence(analysis) => analysis.estimated_bytes(),
            Artifact::Hydropathy(profile) => profile.estimated_bytes(),
            Artifact::Structure(metrics) => metrics.estimated_bytes(),
        };
        mem::size_of::<Self>() + payload
    }
}

/// Computes (or recalls) the chemical analysis of the structure's sequence.
#[instrument(skip_all, fields(structure = structure.id()))]
pub fn analyze_sequence(
    structure: &ProteinStructure,
    cache: &mut MemoryCache<Artifact>,
) -> SequenceAnalysis {
    let key = format!("{}:sequence-analysis", structure.id());
    if let Some(Artifact::Sequence(analysis)) = cache.get(&key) {
        return analysis.clone();
    }

    let seq = structure.sequence();
    let analysis = SequenceAnalysis {
        composition: sequence::composition(&seq),
        molecular_weight: sequence::molecular_weight(&seq),
        charge_distribution: sequence::charge_distribution(&seq),
        isoelectric_point: sequence::isoelectric_point(&seq),
    };
    cache.insert(key, Artifact::Sequence(analysis.clone()));
    analysis
}

/// Computes (or recalls) the windowed hydropathy profile of the structure's
/// sequence.
#[instrument(skip_all, fields(structure = structure.id(), window))]
pub fn hydropathy_profile(
    structure: &ProteinStructure,
    window: usize,
    cache: &mut MemoryCache<Artifact>,
) -> Vec<f64> {
    let key = format!("{}:hydropathy:w{}", structure.id(), window);
    if let Some(Artifact::Hydropathy(profile)) = cache.get(&key) {
        return profile.clone();
    }

    let profile = sequence::hydrophobicity_profile(&structure.sequence(), window);
    cache.insert(key, Artifact::Hydropathy(profile.clone()));
    profile
}

/// Computes (or recalls) the geometric metrics of the structure, optionally
/// restricted to one chain.
///
/// An unknown chain identifier selects no atoms and yields the degenerate
/// metrics (origin, zero radius, zero box) rather than an error.
#[instrument(skip_all, fields(structure = structure.id()))]
pub fn structure_metrics(
    structure: &ProteinStructure,
    chain: Option<char>,
    cache: &mut MemoryCache<Artifact>,
) -> StructureMetrics {
    let key = match chain {
        Some(id) => format!("{}:structure-metrics:chain-{id}", structure.id()),
        None => format!("{}:structure-metrics:all", structure.id()),
    };
    if let Some(Artifact::Structure(metrics)) = cache.get(&key) {
        return metrics.clone();
    }

    let all_atoms: Vec<&Atom> = structure.atoms_iter().map(|(_, atom)| atom).collect();
    let selected: Vec<&Atom> = match chain.and_then(|id| structure.find_chain_by_id(id)) {
        Some(chain_id) => metrics::atoms_by_chain(&all_atoms, chain_id),
        None if chain.is_some() => Vec::new(),
        None => all_atoms,
    };

    let computed = StructureMetrics {
        center_of_mass: metrics::center_of_mass(&selected),
        radius_of_gyration: metrics::radius_of_gyration(&selected),
        bounding_box: metrics::bounding_box(&selected),
        atom_count: selected.len(),
    };
    cache.insert(key, Artifact::Structure(computed.clone()));
    computed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chemistry::properties::AminoAcid;
    use crate::core::models::chain::ChainType;
    use crate::engine::config::EngineConfig;

    fn test_cache() -> MemoryCache<Artifact> {
        MemoryCache::new(EngineConfig::default())
    }

    fn tripeptide() -> ProteinStructure {
        let mut structure = ProteinStructure::new("1ABC", "tripeptide");
        let chain_id = structure.add_chain('A', ChainType::Protein);
        for (number, (name, aa)) in [
            ("GLY", AminoAcid::Glycine),
            ("ALA", AminoAcid::Alanine),
            ("LYS", AminoAcid::Lysine),
        ]
        .into_iter()
        .enumerate()
        {
            let residue_id = structure
                .add_residue(chain_id, number as isize + 1, name, aa)
                .unwrap();
            let x = number as f64 * 2.0;
            let atom = Atom::new(
                number as u32 + 1,
                "CA",
                residue_id,
                chain_id,
                Point3::new(x, 0.0, 0.0),
            );
            structure.add_atom_to_residue(residue_id, atom).unwrap();
        }
        structure
    }

    #[test]
    fn analyze_sequence_reports_the_expected_chemistry() {
        let structure = tripeptide();
        let mut cache = test_cache();

        let analysis = analyze_sequence(&structure, &mut cache);

        assert_eq!(analysis.composition.total_residues, 3);
        assert_eq!(analysis.charge_distribution, vec![0, 0, 1]);
        let expected_mw = sequence::molecular_weight("GAK");
        assert!((analysis.molecular_weight - expected_mw).abs() < 1e-9);
        assert!(analysis.isoelectric_point.ph > 7.0); // lysine-bearing peptide is basic
    }

    #[test]
    fn analyze_sequence_is_memoized_by_structure_identity() {
        let structure = tripeptide();
        let mut cache = test_cache();

        let first = analyze_sequence(&structure, &mut cache);
        assert_eq!(cache.len(), 1);

        let second = analyze_sequence(&structure, &mut cache);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn hydropathy_profile_keys_include_the_window() {
        let structure = tripeptide();
        let mut cache = test_cache();

        let w1 = hydropathy_profile(&structure, 1, &mut cache);
        let w2 = hydropathy_profile(&structure, 2, &mut cache);

        assert_eq!(w1.len(), 3);
        assert_eq!(w2.len(), 3);
        assert_eq!(cache.len(), 2);
        assert!(cache.contains_key("1ABC:hydropathy:w1"));
        assert!(cache.contains_key("1ABC:hydropathy:w2"));
    }

    #[test]
    fn structure_metrics_match_the_hand_computed_geometry() {
        let structure = tripeptide();
        let mut cache = test_cache();

        let metrics = structure_metrics(&structure, None, &mut cache);

        assert_eq!(metrics.atom_count, 3);
        assert_eq!(metrics.center_of_mass, Point3::new(2.0, 0.0, 0.0));
        assert!((metrics.radius_of_gyration - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(metrics.bounding_box.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(metrics.bounding_box.max, Point3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_chain_yields_degenerate_metrics() {
        let structure = tripeptide();
        let mut cache = test_cache();

        let metrics = structure_metrics(&structure, Some('Z'), &mut cache);

        assert_eq!(metrics.atom_count, 0);
        assert_eq!(metrics.center_of_mass, Point3::origin());
        assert_eq!(metrics.radius_of_gyration, 0.0);
        assert_eq!(metrics.bounding_box.min, Point3::origin());
    }

    #[test]
    fn wrong_variant_under_a_key_is_recomputed_and_overwritten() {
        let structure = tripeptide();
        let mut cache = test_cache();

        // Poison the sequence-analysis key with a different variant.
        cache.insert(
            "1ABC:sequence-analysis",
            Artifact::Hydropathy(vec![1.0, 2.0]),
        );

        let analysis = analyze_sequence(&structure, &mut cache);
        assert_eq!(analysis.composition.total_residues, 3);
        assert!(matches!(
            cache.get("1ABC:sequence-analysis"),
            Some(Artifact::Sequence(_))
        ));
    }

    #[test]
    fn results_serialize_for_the_downstream_layer() {
        let structure = tripeptide();
        let mut cache = test_cache();

        let analysis = analyze_sequence(&structure, &mut cache);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["composition"]["total_residues"], 3);
        assert!(json["isoelectric_point"]["ph"].is_number());

        let metrics = structure_metrics(&structure, None, &mut cache);
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["atom_count"], 3);
    }
}
