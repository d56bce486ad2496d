use super::ids::ResidueId;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainType {
    Protein,
    Ligand,
    Water,
    Other,
}

impl FromStr for ChainType {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protein" => Ok(ChainType::Protein),
            "ligand" => Ok(ChainType::Ligand),
            "water" => Ok(ChainType::Water),
            _ => Ok(ChainType::Other),
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChainType::Protein => "Protein",
                ChainType::Ligand => "Ligand",
                ChainType::Water => "Water",
                ChainType::Other => "Other",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: char,                        // Chain identifier (e.g., 'A', 'B')
    pub chain_type: ChainType,           // Type of the chain
    pub(crate) residues: Vec<ResidueId>, // Ordered list of residue IDs belonging to this chain
}

impl Chain {
    pub(crate) fn new(id: char, chain_type: ChainType) -> Self {
        Self {
            id,
            chain_type,
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_type_parses_known_strings() {
        assert_eq!("protein".parse(), Ok(ChainType::Protein));
        assert_eq!("Ligand".parse(), Ok(ChainType::Ligand));
        assert_eq!("WATER".parse(), Ok(ChainType::Water));
        assert_eq!("dna".parse(), Ok(ChainType::Other));
    }

    #[test]
    fn chain_type_displays_name() {
        assert_eq!(ChainType::Protein.to_string(), "Protein");
        assert_eq!(ChainType::Other.to_string(), "Other");
    }

    #[test]
    fn new_chain_starts_empty() {
        let chain = Chain::new('A', ChainType::Protein);
        assert_eq!(chain.id, 'A');
        assert_eq!(chain.chain_type, ChainType::Protein);
        assert!(chain.residues().is_empty());
    }
}
