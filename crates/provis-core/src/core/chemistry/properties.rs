use phf::{Map, phf_map};
use serde::Serialize;

/// The twenty canonical amino acids plus the `Unknown` sentinel.
///
/// Every residue code ever seen by the engine maps onto this enum;
/// unrecognized codes become [`AminoAcid::Unknown`] rather than failing, so
/// sequences with non-standard residues flow through every computation with
/// defined (zero-contribution) behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // ALA
    Glycine,    // GLY
    Isoleucine, // ILE
    Leucine,    // LEU
    Proline,    // PRO
    Valine,     // VAL

    // --- Aromatic ---
    Phenylalanine, // PHE
    Tryptophan,    // TRP
    Tyrosine,      // TYR

    // --- Polar, Uncharged ---
    Asparagine, // ASN
    Cysteine,   // CYS
    Glutamine,  // GLN
    Methionine, // MET
    Serine,     // SER
    Threonine,  // THR

    // --- Positively Charged (Basic) ---
    Arginine,  // ARG
    Histidine, // HIS - predominantly neutral at physiological pH; formal charge 0
    Lysine,    // LYS

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // ASP
    GlutamicAcid, // GLU

    // --- Sentinel ---
    Unknown, // UNK / X
}

/// Broad polarity class of a residue's side group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Polar,
    Nonpolar,
    Charged,
}

/// Chemical category of a residue's side group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Aliphatic,
    Aromatic,
    Basic,
    Acidic,
    Hydroxyl,
    Sulfur,
    Amide,
}

/// Static physicochemical properties of one canonical amino acid.
///
/// `residue_mass` is the *residue* mass in Daltons — the free amino acid
/// minus one water — so a peptide's molecular weight is the sum of residue
/// masses plus exactly one water for the chain (peptide-bond condensation is
/// already netted out). Hydrophobicity is the Kyte-Doolittle hydropathy
/// value; `charge` is the formal side-chain charge at physiological pH.
///
/// The table is constructed at compile time and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AminoAcidProperties {
    pub name: &'static str,
    pub three_letter: &'static str,
    pub one_letter: char,
    pub residue_mass: f64,
    pub hydrophobicity: f64,
    pub charge: i8,
    pub polarity: Polarity,
    pub category: Category,
}

macro_rules! aa_props {
    ($name:literal, $three:literal, $one:literal, $mass:literal, $hydro:literal, $charge:literal, $pol:ident, $cat:ident) => {
        AminoAcidProperties {
            name: $name,
            three_letter: $three,
            one_letter: $one,
            residue_mass: $mass,
            hydrophobicity: $hydro,
            charge: $charge,
            polarity: Polarity::$pol,
            category: Category::$cat,
        }
    };
}

static ALANINE: AminoAcidProperties =
    aa_props!("Alanine", "ALA", 'A', 71.0788, 1.8, 0, Nonpolar, Aliphatic);
static GLYCINE: AminoAcidProperties =
    aa_props!("Glycine", "GLY", 'G', 57.0519, -0.4, 0, Nonpolar, Aliphatic);
static ISOLEUCINE: AminoAcidProperties =
    aa_props!("Isoleucine", "ILE", 'I', 113.1594, 4.5, 0, Nonpolar, Aliphatic);
static LEUCINE: AminoAcidProperties =
    aa_props!("Leucine", "LEU", 'L', 113.1594, 3.8, 0, Nonpolar, Aliphatic);
static PROLINE: AminoAcidProperties =
    aa_props!("Proline", "PRO", 'P', 97.1167, -1.6, 0, Nonpolar, Aliphatic);
static VALINE: AminoAcidProperties =
    aa_props!("Valine", "VAL", 'V', 99.1326, 4.2, 0, Nonpolar, Aliphatic);
static PHENYLALANINE: AminoAcidProperties =
    aa_props!("Phenylalanine", "PHE", 'F', 147.1766, 2.8, 0, Nonpolar, Aromatic);
static TRYPTOPHAN: AminoAcidProperties =
    aa_props!("Tryptophan", "TRP", 'W', 186.2132, -0.9, 0, Nonpolar, Aromatic);
static TYROSINE: AminoAcidProperties =
    aa_props!("Tyrosine", "TYR", 'Y', 163.1760, -1.3, 0, Polar, Aromatic);
static ASPARAGINE: AminoAcidProperties =
    aa_props!("Asparagine", "ASN", 'N', 114.1038, -3.5, 0, Polar, Amide);
static CYSTEINE: AminoAcidProperties =
    aa_props!("Cysteine", "CYS", 'C', 103.1388, 2.5, 0, Polar, Sulfur);
static GLUTAMINE: AminoAcidProperties =
    aa_props!("Glutamine", "GLN", 'Q', 128.1307, -3.5, 0, Polar, Amide);
static METHIONINE: AminoAcidProperties =
    aa_props!("Methionine", "MET", 'M', 131.1926, 1.9, 0, Nonpolar, Sulfur);
static SERINE: AminoAcidProperties =
    aa_props!("Serine", "SER", 'S', 87.0782, -0.8, 0, Polar, Hydroxyl);
static THREONINE: AminoAcidProperties =
    aa_props!("Threonine", "THR", 'T', 101.1051, -0.7, 0, Polar, Hydroxyl);
static ARGININE: AminoAcidProperties =
    aa_props!("Arginine", "ARG", 'R', 156.1875, -4.5, 1, Charged, Basic);
static HISTIDINE: AminoAcidProperties =
    aa_props!("Histidine", "HIS", 'H', 137.1411, -3.2, 0, Charged, Basic);
static LYSINE: AminoAcidProperties =
    aa_props!("Lysine", "LYS", 'K', 128.1741, -3.9, 1, Charged, Basic);
static ASPARTIC_ACID: AminoAcidProperties =
    aa_props!("Aspartic Acid", "ASP", 'D', 115.0886, -3.5, -1, Charged, Acidic);
static GLUTAMIC_ACID: AminoAcidProperties =
    aa_props!("Glutamic Acid", "GLU", 'E', 129.1155, -3.5, -1, Charged, Acidic);

static THREE_LETTER_CODES: Map<&'static str, AminoAcid> = phf_map! {
    "ALA" => AminoAcid::Alanine,
    "GLY" => AminoAcid::Glycine,
    "ILE" => AminoAcid::Isoleucine,
    "LEU" => AminoAcid::Leucine,
    "PRO" => AminoAcid::Proline,
    "VAL" => AminoAcid::Valine,
    "PHE" => AminoAcid::Phenylalanine,
    "TRP" => AminoAcid::Tryptophan,
    "TYR" => AminoAcid::Tyrosine,
    "ASN" => AminoAcid::Asparagine,
    "CYS" => AminoAcid::Cysteine,
    "GLN" => AminoAcid::Glutamine,
    "MET" => AminoAcid::Methionine,
    "SER" => AminoAcid::Serine,
    "THR" => AminoAcid::Threonine,
    "ARG" => AminoAcid::Arginine,
    "HIS" => AminoAcid::Histidine,
    "LYS" => AminoAcid::Lysine,
    "ASP" => AminoAcid::AsparticAcid,
    "GLU" => AminoAcid::GlutamicAcid,
};

impl AminoAcid {
    /// Looks up an amino acid by its one-letter code, case-insensitively.
    ///
    /// Codes outside the canonical twenty map to [`AminoAcid::Unknown`].
    pub fn from_one_letter(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'A' => AminoAcid::Alanine,
            'G' => AminoAcid::Glycine,
            'I' => AminoAcid::Isoleucine,
            'L' => AminoAcid::Leucine,
            'P' => AminoAcid::Proline,
            'V' => AminoAcid::Valine,
            'F' => AminoAcid::Phenylalanine,
            'W' => AminoAcid::Tryptophan,
            'Y' => AminoAcid::Tyrosine,
            'N' => AminoAcid::Asparagine,
            'C' => AminoAcid::Cysteine,
            'Q' => AminoAcid::Glutamine,
            'M' => AminoAcid::Methionine,
            'S' => AminoAcid::Serine,
            'T' => AminoAcid::Threonine,
            'R' => AminoAcid::Arginine,
            'H' => AminoAcid::Histidine,
            'K' => AminoAcid::Lysine,
            'D' => AminoAcid::AsparticAcid,
            'E' => AminoAcid::GlutamicAcid,
            _ => AminoAcid::Unknown,
        }
    }

    /// Looks up an amino acid by its three-letter code, case-insensitively.
    ///
    /// Codes outside the canonical twenty map to [`AminoAcid::Unknown`].
    pub fn from_three_letter(code: &str) -> Self {
        THREE_LETTER_CODES
            .get(code.trim().to_ascii_uppercase().as_str())
            .copied()
            .unwrap_or(AminoAcid::Unknown)
    }

    /// The static property row for this residue; `None` for the sentinel.
    pub fn properties(self) -> Option<&'static AminoAcidProperties> {
        match self {
            AminoAcid::Alanine => Some(&ALANINE),
            AminoAcid::Glycine => Some(&GLYCINE),
            AminoAcid::Isoleucine => Some(&ISOLEUCINE),
            AminoAcid::Leucine => Some(&LEUCINE),
            AminoAcid::Proline => Some(&PROLINE),
            AminoAcid::Valine => Some(&VALINE),
            AminoAcid::Phenylalanine => Some(&PHENYLALANINE),
            AminoAcid::Tryptophan => Some(&TRYPTOPHAN),
            AminoAcid::Tyrosine => Some(&TYROSINE),
            AminoAcid::Asparagine => Some(&ASPARAGINE),
            AminoAcid::Cysteine => Some(&CYSTEINE),
            AminoAcid::Glutamine => Some(&GLUTAMINE),
            AminoAcid::Methionine => Some(&METHIONINE),
            AminoAcid::Serine => Some(&SERINE),
            AminoAcid::Threonine => Some(&THREONINE),
            AminoAcid::Arginine => Some(&ARGININE),
            AminoAcid::Histidine => Some(&HISTIDINE),
            AminoAcid::Lysine => Some(&LYSINE),
            AminoAcid::AsparticAcid => Some(&ASPARTIC_ACID),
            AminoAcid::GlutamicAcid => Some(&GLUTAMIC_ACID),
            AminoAcid::Unknown => None,
        }
    }

    /// One-letter code; `'X'` for the sentinel.
    pub fn one_letter(self) -> char {
        self.properties().map_or('X', |p| p.one_letter)
    }

    /// Three-letter code; `"UNK"` for the sentinel.
    pub fn three_letter(self) -> &'static str {
        self.properties().map_or("UNK", |p| p.three_letter)
    }

    /// Residue mass in Daltons; 0 for the sentinel.
    pub fn residue_mass(self) -> f64 {
        self.properties().map_or(0.0, |p| p.residue_mass)
    }

    /// Kyte-Doolittle hydropathy; 0 for the sentinel.
    pub fn hydrophobicity(self) -> f64 {
        self.properties().map_or(0.0, |p| p.hydrophobicity)
    }

    /// Formal side-chain charge at physiological pH; 0 for the sentinel.
    pub fn charge(self) -> i8 {
        self.properties().map_or(0, |p| p.charge)
    }
}
