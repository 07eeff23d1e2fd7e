//! Built-in example molecules for demo flows and the static answer cache.

#[derive(Debug, Clone, Copy)]
pub struct ExampleMolecule {
    pub name: &'static str,
    pub smiles: &'static str,
}

/// Well-characterized drugs with canonical SMILES. The answer cache keys off
/// these exact strings.
pub static EXAMPLE_MOLECULES: &[ExampleMolecule] = &[
    ExampleMolecule { name: "Aspirin", smiles: "CC(=O)Oc1ccccc1C(=O)O" },
    ExampleMolecule { name: "Caffeine", smiles: "Cn1c(=O)c2c(ncn2C)n(c1=O)C" },
    ExampleMolecule { name: "Ibuprofen", smiles: "CC(C)Cc1ccc(cc1)[C@@H](C)C(=O)O" },
    ExampleMolecule { name: "Diazepam", smiles: "CN1C(=O)CN=C(c2ccccc21)c3ccccc3Cl" },
    ExampleMolecule { name: "Metformin", smiles: "CN(C)C(=N)NC(=N)N" },
    ExampleMolecule {
        name: "Penicillin G",
        smiles: "CC1([C@@H](N2[C@H](S1)[C@@H](C2=O)NC(=O)Cc3ccccc3)C(=O)O)C",
    },
];

/// Look up an example molecule by display name.
pub fn example_by_name(name: &str) -> Option<&'static ExampleMolecule> {
    EXAMPLE_MOLECULES.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(
            example_by_name("Aspirin").unwrap().smiles,
            "CC(=O)Oc1ccccc1C(=O)O"
        );
        assert!(example_by_name("Warfarin").is_none());
    }

    #[test]
    fn test_catalog_names_unique() {
        let mut names: Vec<_> = EXAMPLE_MOLECULES.iter().map(|m| m.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EXAMPLE_MOLECULES.len());
    }
}
