//! Scaffold templates and combinatorial R-group enumeration.
//!
//! Scaffold SMILES carry `[Rn]` placeholder sites. Substituting a group
//! inserts it as a parenthesized branch; substituting `[H]` removes the
//! site entirely.

use std::collections::BTreeMap;

/// A core scaffold with numbered substitution sites (`[R1]`..`[Rn]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scaffold {
    pub name: &'static str,
    pub smiles: &'static str,
    pub site_count: usize,
}

impl Scaffold {
    /// Placeholder keys for this scaffold, `"R1"` through `"Rn"`.
    pub fn site_keys(&self) -> Vec<String> {
        (1..=self.site_count).map(|i| format!("R{i}")).collect()
    }
}

/// A substituent that can occupy a scaffold site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGroup {
    pub name: &'static str,
    pub smiles: &'static str,
}

pub static SCAFFOLDS: [Scaffold; 8] = [
    Scaffold { name: "Benzene", smiles: "c1cc([R1])c([R2])cc1[R3]", site_count: 3 },
    Scaffold { name: "Pyridine", smiles: "c1cc([R1])ncc1[R2]", site_count: 2 },
    Scaffold { name: "Pyrimidine", smiles: "c1nc([R1])nc(c1)[R2]", site_count: 2 },
    Scaffold { name: "Piperidine", smiles: "C1CC([R1])NCC1[R2]", site_count: 2 },
    Scaffold { name: "Indole", smiles: "c1ccc2c(c1)[nH]c([R1])c2[R2]", site_count: 2 },
    Scaffold { name: "Naphthalene", smiles: "c1cc2cc([R1])ccc2c([R2])c1", site_count: 2 },
    Scaffold { name: "Thiophene", smiles: "c1cc([R1])sc1[R2]", site_count: 2 },
    Scaffold { name: "Imidazole", smiles: "c1nc([R1])c[nH]1", site_count: 1 },
];

pub static R_GROUPS: [RGroup; 17] = [
    RGroup { name: "H (none)", smiles: "[H]" },
    RGroup { name: "F", smiles: "F" },
    RGroup { name: "Cl", smiles: "Cl" },
    RGroup { name: "Br", smiles: "Br" },
    RGroup { name: "OH", smiles: "O" },
    RGroup { name: "NH2", smiles: "N" },
    RGroup { name: "CH3", smiles: "C" },
    RGroup { name: "CF3", smiles: "C(F)(F)F" },
    RGroup { name: "OCH3", smiles: "OC" },
    RGroup { name: "CN", smiles: "C#N" },
    RGroup { name: "NO2", smiles: "[N+](=O)[O-]" },
    RGroup { name: "COOH", smiles: "C(=O)O" },
    RGroup { name: "COMe", smiles: "C(=O)C" },
    RGroup { name: "SO2Me", smiles: "S(=O)(=O)C" },
    RGroup { name: "NHAc", smiles: "NC(=O)C" },
    RGroup { name: "tBu", smiles: "C(C)(C)C" },
    RGroup { name: "Phenyl", smiles: "c1ccccc1" },
];

/// One enumerated molecule together with the site assignments that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryMember {
    pub smiles: String,
    pub assignments: BTreeMap<String, String>,
}

/// Substitute R-group assignments into a scaffold template.
///
/// Each `[Rn]` placeholder is replaced once: `[H]` deletes the site,
/// any other group lands as `({group})`.
pub fn substitute_sites(scaffold_smiles: &str, assignments: &BTreeMap<String, String>) -> String {
    let mut result = scaffold_smiles.to_string();
    for (site, group) in assignments {
        let placeholder = format!("[{site}]");
        if group == "[H]" {
            result = result.replacen(&placeholder, "", 1);
        } else {
            result = result.replacen(&placeholder, &format!("({group})"), 1);
        }
    }
    result
}

/// Enumerate the cartesian product of per-site substituent choices.
///
/// Sites iterate in key order and the last site varies fastest, so the
/// output order is deterministic. An empty options map yields the bare
/// scaffold.
pub fn enumerate_library(
    scaffold_smiles: &str,
    options: &BTreeMap<String, Vec<String>>,
) -> Vec<LibraryMember> {
    let sites: Vec<(&String, &[String])> = options
        .iter()
        .map(|(site, groups)| (site, groups.as_slice()))
        .collect();
    let mut members = Vec::new();
    let mut current = BTreeMap::new();
    fill_sites(scaffold_smiles, &sites, &mut current, &mut members);
    members
}

fn fill_sites(
    scaffold_smiles: &str,
    remaining: &[(&String, &[String])],
    current: &mut BTreeMap<String, String>,
    out: &mut Vec<LibraryMember>,
) {
    let Some(((site, groups), rest)) = remaining.split_first() else {
        out.push(LibraryMember {
            smiles: substitute_sites(scaffold_smiles, current),
            assignments: current.clone(),
        });
        return;
    };
    for group in groups.iter() {
        current.insert((*site).clone(), group.clone());
        fill_sites(scaffold_smiles, rest, current, out);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::validate_smiles;

    fn assignments(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_inserts_parenthesized_branch() {
        let out = substitute_sites("c1nc([R1])c[nH]1", &assignments(&[("R1", "F")]));
        assert_eq!(out, "c1nc((F))c[nH]1");
    }

    #[test]
    fn test_substitute_hydrogen_removes_site() {
        let out = substitute_sites(
            "c1cc([R1])ncc1[R2]",
            &assignments(&[("R1", "[H]"), ("R2", "Cl")]),
        );
        assert_eq!(out, "c1cc()ncc1(Cl)");
    }

    #[test]
    fn test_substitute_leaves_unassigned_sites() {
        let out = substitute_sites("c1cc([R1])ncc1[R2]", &assignments(&[("R1", "F")]));
        assert_eq!(out, "c1cc((F))ncc1[R2]");
    }

    #[test]
    fn test_enumerate_counts_cartesian_product() {
        let mut options = BTreeMap::new();
        options.insert("R1".to_string(), vec!["F".to_string(), "Cl".to_string()]);
        options.insert(
            "R2".to_string(),
            vec!["O".to_string(), "N".to_string(), "C".to_string()],
        );
        let library = enumerate_library("c1cc([R1])ncc1[R2]", &options);
        assert_eq!(library.len(), 6);
    }

    #[test]
    fn test_enumerate_order_varies_last_site_fastest() {
        let mut options = BTreeMap::new();
        options.insert("R1".to_string(), vec!["F".to_string(), "Cl".to_string()]);
        options.insert("R2".to_string(), vec!["O".to_string(), "N".to_string()]);
        let library = enumerate_library("c1cc([R1])ncc1[R2]", &options);
        let orders: Vec<(&str, &str)> = library
            .iter()
            .map(|m| {
                (
                    m.assignments["R1"].as_str(),
                    m.assignments["R2"].as_str(),
                )
            })
            .collect();
        assert_eq!(
            orders,
            vec![("F", "O"), ("F", "N"), ("Cl", "O"), ("Cl", "N")]
        );
    }

    #[test]
    fn test_enumerate_empty_options_yields_bare_scaffold() {
        let library = enumerate_library("c1nc([R1])c[nH]1", &BTreeMap::new());
        assert_eq!(library.len(), 1);
        assert_eq!(library[0].smiles, "c1nc([R1])c[nH]1");
        assert!(library[0].assignments.is_empty());
    }

    #[test]
    fn test_scaffold_site_counts_match_templates() {
        for scaffold in &SCAFFOLDS {
            let placeholders = scaffold.smiles.matches("[R").count();
            assert_eq!(
                placeholders, scaffold.site_count,
                "{} template disagrees with its site count",
                scaffold.name
            );
        }
    }

    #[test]
    fn test_site_keys_are_numbered_from_one() {
        assert_eq!(SCAFFOLDS[0].site_keys(), vec!["R1", "R2", "R3"]);
        assert_eq!(SCAFFOLDS[7].site_keys(), vec!["R1"]);
    }

    #[test]
    fn test_r_group_names_are_unique() {
        let mut names: Vec<&str> = R_GROUPS.iter().map(|rg| rg.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), R_GROUPS.len());
    }

    #[test]
    fn test_enumerated_members_pass_validation() {
        let scaffold = &SCAFFOLDS[0];
        let mut options = BTreeMap::new();
        for key in scaffold.site_keys() {
            options.insert(key, vec!["[H]".to_string(), "C(F)(F)F".to_string()]);
        }
        let library = enumerate_library(scaffold.smiles, &options);
        assert_eq!(library.len(), 8);
        for member in &library {
            assert_eq!(
                validate_smiles(&member.smiles),
                Ok(()),
                "{} should validate",
                member.smiles
            );
        }
    }
}
