use super::properties::AminoAcid;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Average mass of one water molecule in Daltons, added once per peptide
/// chain for the terminal hydroxyl/amine.
pub const WATER_MASS: f64 = 18.0153;

// pKa values for the ionizable groups (EMBOSS set), used by the
// Henderson-Hasselbalch net-charge model behind the isoelectric point.
const PKA_NTERM: f64 = 9.69;
const PKA_CTERM: f64 = 2.34;
const PKA_ASP: f64 = 3.65;
const PKA_GLU: f64 = 4.25;
const PKA_CYS: f64 = 8.18;
const PKA_TYR: f64 = 10.07;
const PKA_HIS: f64 = 6.00;
const PKA_LYS: f64 = 10.53;
const PKA_ARG: f64 = 12.48;

/// Bisection tolerance on the net charge magnitude.
const PI_CHARGE_TOLERANCE: f64 = 0.001;
/// Bisection iteration cap; on exhaustion the midpoint of the final bracket
/// is returned with `converged == false`.
const PI_MAX_ITERATIONS: u32 = 100;

/// Parses a one-letter sequence into residues, mapping unrecognized
/// characters to the `Unknown` sentinel.
pub fn parse(sequence: &str) -> Vec<AminoAcid> {
    sequence.chars().map(AminoAcid::from_one_letter).collect()
}

/// Converts a slice of three-letter codes into a one-letter sequence.
///
/// Unrecognized codes become `X`; the conversion never fails.
pub fn three_to_one<S: AsRef<str>>(codes: &[S]) -> String {
    codes
        .iter()
        .map(|code| AminoAcid::from_three_letter(code.as_ref()).one_letter())
        .collect()
}

/// Converts a one-letter sequence into three-letter codes.
///
/// Unrecognized characters become `"UNK"`; the conversion never fails.
pub fn one_to_three(sequence: &str) -> Vec<&'static str> {
    parse(sequence)
        .into_iter()
        .map(AminoAcid::three_letter)
        .collect()
}

/// Amino-acid composition of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    /// Occurrence count for each residue present in the sequence.
    pub counts: BTreeMap<AminoAcid, usize>,
    /// The same counts as percentages of the total length.
    pub percentages: BTreeMap<AminoAcid, f64>,
    /// Total residue count.
    pub total_residues: usize,
}

/// Counts each residue present in the sequence.
///
/// Percentages sum to 100 (within floating-point tolerance) whenever the
/// sequence is non-empty; the empty sequence yields empty maps and a total
/// of zero. Non-standard residues are counted under the `Unknown` sentinel.
pub fn composition(sequence: &str) -> Composition {
    let mut counts: BTreeMap<AminoAcid, usize> = BTreeMap::new();
    for aa in parse(sequence) {
        *counts.entry(aa).or_insert(0) += 1;
    }
    let total_residues: usize = counts.values().sum();
    let percentages = counts
        .iter()
        .map(|(&aa, &count)| (aa, count as f64 / total_residues as f64 * 100.0))
        .collect();
    Composition {
        counts,
        percentages,
        total_residues,
    }
}

/// Molecular weight of the peptide in Daltons.
///
/// Sum of residue masses plus one water for the chain termini; the table
/// stores residue masses, so peptide-bond condensation is already netted
/// out. The empty sequence weighs 0 and unknown residues contribute 0.
pub fn molecular_weight(sequence: &str) -> f64 {
    let residues = parse(sequence);
    if residues.is_empty() {
        return 0.0;
    }
    residues.iter().map(|aa| aa.residue_mass()).sum::<f64>() + WATER_MASS
}

/// Sliding-window average hydropathy along the sequence.
///
/// Position `i` averages the Kyte-Doolittle values over `[i - window + 1,
/// i]`, clipped to the sequence start (the window shrinks near the
/// N-terminus rather than wrapping or padding). The output has exactly one
/// value per residue; a `window` of 0 is treated as 1.
pub fn hydrophobicity_profile(sequence: &str, window: usize) -> Vec<f64> {
    let values: Vec<f64> = parse(sequence)
        .iter()
        .map(|aa| aa.hydrophobicity())
        .collect();
    let window = window.max(1);
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Per-residue formal charge in sequence order, one value per residue.
pub fn charge_distribution(sequence: &str) -> Vec<i8> {
    parse(sequence).iter().map(|aa| aa.charge()).collect()
}

/// Result of the isoelectric-point search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IsoelectricPoint {
    /// The pH at which the modeled net charge is zero.
    pub ph: f64,
    /// False when the bisection hit its iteration cap; the reported pH is
    /// then the midpoint of the final bracket.
    pub converged: bool,
    /// Number of bisection iterations performed.
    pub iterations: u32,
}

/// Net charge of the sequence at a given pH via Henderson-Hasselbalch.
fn net_charge_at_ph(residues: &[AminoAcid], ph: f64) -> f64 {
    let mut charge = 0.0;

    // Termini
    charge += 1.0 / (1.0 + 10f64.powf(ph - PKA_NTERM));
    charge -= 1.0 / (1.0 + 10f64.powf(PKA_CTERM - ph));

    for aa in residues {
        match aa {
            AminoAcid::AsparticAcid => charge -= 1.0 / (1.0 + 10f64.powf(PKA_ASP - ph)),
            AminoAcid::GlutamicAcid => charge -= 1.0 / (1.0 + 10f64.powf(PKA_GLU - ph)),
            AminoAcid::Cysteine => charge -= 1.0 / (1.0 + 10f64.powf(PKA_CYS - ph)),
            AminoAcid::Tyrosine => charge -= 1.0 / (1.0 + 10f64.powf(PKA_TYR - ph)),
            AminoAcid::Histidine => charge += 1.0 / (1.0 + 10f64.powf(ph - PKA_HIS)),
            AminoAcid::Lysine => charge += 1.0 / (1.0 + 10f64.powf(ph - PKA_LYS)),
            AminoAcid::Arginine => charge += 1.0 / (1.0 + 10f64.powf(ph - PKA_ARG)),
            _ => {}
        }
    }
    charge
}

/// Isoelectric point of the sequence by bisection over pH ∈ [0, 14].
///
/// Converges when the modeled net charge magnitude drops below 0.001; on
/// cap exhaustion the midpoint of the final bracket is returned with
/// `converged == false` rather than faulting. The empty sequence resolves
/// to the neutral default pH 7.0.
pub fn isoelectric_point(sequence: &str) -> IsoelectricPoint {
    let residues = parse(sequence);
    if residues.is_empty() {
        return IsoelectricPoint {
            ph: 7.0,
            converged: true,
            iterations: 0,
        };
    }

    let mut lo = 0.0f64;
    let mut hi = 14.0f64;

    for iteration in 1..=PI_MAX_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        let charge = net_charge_at_ph(&residues, mid);
        if charge.abs() < PI_CHARGE_TOLERANCE {
            return IsoelectricPoint {
                ph: mid,
                converged: true,
                iterations: iteration,
            };
        }
        if charge > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    warn!(
        sequence_length = residues.len(),
        "isoelectric point search hit its iteration cap"
    );
    IsoelectricPoint {
        ph: (lo + hi) / 2.0,
        converged: false,
        iterations: PI_MAX_ITERATIONS,
    }
}
