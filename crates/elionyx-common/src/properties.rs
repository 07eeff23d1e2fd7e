//! The property registry: every pharmacological endpoint the assistant can
//! score, with its answer type, display labels, physical unit, and polarity.
//!
//! The registry is a fixed static table. Lookups by id are linear — the table
//! has thirteen entries and is read-only for the process lifetime.

use crate::types::Label;

/// How the model answers for this property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Two-way (A)/(B) answer.
    Classification,
    /// Normalized 000-1000 integer answer, rescaled to real units.
    Regression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyCategory {
    Pharmacokinetics,
    Toxicity,
    Binding,
    Clinical,
}

/// Display phrases for the two categorical outcomes.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeLabels {
    pub a: &'static str,
    pub b: &'static str,
}

impl OutcomeLabels {
    pub fn phrase(&self, label: Label) -> &'static str {
        match label {
            Label::A => self.a,
            Label::B => self.b,
        }
    }
}

/// Immutable catalog entry for one predictable property.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub category: PropertyCategory,
    pub kind: PropertyKind,
    /// Physical unit suffix for display; empty when unitless.
    pub unit: &'static str,
    pub description: &'static str,
    /// Display phrases per outcome; classification properties only.
    pub labels: Option<OutcomeLabels>,
    /// Which categorical outcome counts as the desirable one. `None` means
    /// the property has no direction (all regressions, by convention).
    pub favorable: Option<Label>,
}

pub static PROPERTY_DEFINITIONS: &[PropertyDefinition] = &[
    PropertyDefinition {
        id: "bbb",
        name: "Blood-Brain Barrier Penetration",
        short_name: "BBB",
        category: PropertyCategory::Pharmacokinetics,
        kind: PropertyKind::Classification,
        unit: "",
        description: "Whether the drug can cross the blood-brain barrier",
        labels: Some(OutcomeLabels { a: "Does not cross", b: "Crosses BBB" }),
        favorable: Some(Label::B),
    },
    PropertyDefinition {
        id: "caco2",
        name: "Caco-2 Permeability",
        short_name: "Caco-2",
        category: PropertyCategory::Pharmacokinetics,
        kind: PropertyKind::Regression,
        unit: "cm/s (log)",
        description: "Intestinal permeability measured via Caco-2 cell assay",
        labels: None,
        favorable: None,
    },
    PropertyDefinition {
        id: "ppbr",
        name: "Plasma Protein Binding Rate",
        short_name: "PPBR",
        category: PropertyCategory::Pharmacokinetics,
        kind: PropertyKind::Regression,
        unit: "%",
        description: "Percentage of drug bound to plasma proteins",
        labels: None,
        favorable: None,
    },
    PropertyDefinition {
        id: "logp",
        name: "Lipophilicity (logP)",
        short_name: "logP",
        category: PropertyCategory::Pharmacokinetics,
        kind: PropertyKind::Regression,
        unit: "",
        description: "Octanol-water partition coefficient measuring lipophilicity",
        labels: None,
        favorable: None,
    },
    PropertyDefinition {
        id: "ames",
        name: "AMES Mutagenicity",
        short_name: "AMES",
        category: PropertyCategory::Toxicity,
        kind: PropertyKind::Classification,
        unit: "",
        description: "Whether the drug is mutagenic in the Ames bacterial reverse mutation assay",
        labels: Some(OutcomeLabels { a: "Not mutagenic", b: "Mutagenic" }),
        favorable: Some(Label::A),
    },
    PropertyDefinition {
        id: "dili",
        name: "Drug-Induced Liver Injury",
        short_name: "DILI",
        category: PropertyCategory::Toxicity,
        kind: PropertyKind::Classification,
        unit: "",
        description: "Risk of drug-induced hepatotoxicity",
        labels: Some(OutcomeLabels { a: "No DILI risk", b: "DILI risk" }),
        favorable: Some(Label::A),
    },
    PropertyDefinition {
        id: "herg",
        name: "hERG Channel Inhibition",
        short_name: "hERG",
        category: PropertyCategory::Toxicity,
        kind: PropertyKind::Classification,
        unit: "",
        description: "Cardiotoxicity risk from hERG potassium channel blockade",
        labels: Some(OutcomeLabels { a: "No inhibition", b: "Inhibits hERG" }),
        favorable: Some(Label::A),
    },
    PropertyDefinition {
        id: "ld50",
        name: "Acute Toxicity (LD50)",
        short_name: "LD50",
        category: PropertyCategory::Toxicity,
        kind: PropertyKind::Regression,
        unit: "log(mg/kg)",
        description: "Lethal dose for 50% of test population",
        labels: None,
        favorable: None,
    },
    PropertyDefinition {
        id: "ic50",
        name: "IC50 Binding Affinity",
        short_name: "IC50",
        category: PropertyCategory::Binding,
        kind: PropertyKind::Regression,
        unit: "nM (log)",
        description: "Half-maximal inhibitory concentration for target binding",
        labels: None,
        favorable: None,
    },
    PropertyDefinition {
        id: "kd",
        name: "Dissociation Constant (Kd)",
        short_name: "Kd",
        category: PropertyCategory::Binding,
        kind: PropertyKind::Regression,
        unit: "nM (log)",
        description: "Equilibrium dissociation constant for drug-target binding",
        labels: None,
        favorable: None,
    },
    PropertyDefinition {
        id: "clinical_phase1",
        name: "Phase 1 Trial Approval",
        short_name: "Phase 1",
        category: PropertyCategory::Clinical,
        kind: PropertyKind::Classification,
        unit: "",
        description: "Predicted likelihood of passing Phase 1 clinical trial",
        labels: Some(OutcomeLabels { a: "Fails", b: "Passes" }),
        favorable: Some(Label::B),
    },
    PropertyDefinition {
        id: "clinical_phase2",
        name: "Phase 2 Trial Approval",
        short_name: "Phase 2",
        category: PropertyCategory::Clinical,
        kind: PropertyKind::Classification,
        unit: "",
        description: "Predicted likelihood of passing Phase 2 clinical trial",
        labels: Some(OutcomeLabels { a: "Fails", b: "Passes" }),
        favorable: Some(Label::B),
    },
    PropertyDefinition {
        id: "clinical_phase3",
        name: "Phase 3 Trial Approval",
        short_name: "Phase 3",
        category: PropertyCategory::Clinical,
        kind: PropertyKind::Classification,
        unit: "",
        description: "Predicted likelihood of passing Phase 3 clinical trial",
        labels: Some(OutcomeLabels { a: "Fails", b: "Passes" }),
        favorable: Some(Label::B),
    },
];

/// Look up a property definition by id.
pub fn property_by_id(id: &str) -> Option<&'static PropertyDefinition> {
    PROPERTY_DEFINITIONS.iter().find(|p| p.id == id)
}

// ── Panels ────────────────────────────────────────────────────────────────────

/// Named ordered grouping of properties for one evaluation run. Panel order
/// is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Admet,
    Bbb,
    Toxicity,
    Binding,
    Clinical,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Admet,
        Panel::Bbb,
        Panel::Toxicity,
        Panel::Binding,
        Panel::Clinical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Admet => "admet",
            Panel::Bbb => "bbb",
            Panel::Toxicity => "toxicity",
            Panel::Binding => "binding",
            Panel::Clinical => "clinical",
        }
    }

    pub fn parse(s: &str) -> Option<Panel> {
        match s {
            "admet" => Some(Panel::Admet),
            "bbb" => Some(Panel::Bbb),
            "toxicity" => Some(Panel::Toxicity),
            "binding" => Some(Panel::Binding),
            "clinical" => Some(Panel::Clinical),
            _ => None,
        }
    }

    /// Human label for panel pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Admet => "General ADMET",
            Panel::Bbb => "BBB Penetration",
            Panel::Toxicity => "Toxicity Panel",
            Panel::Binding => "Binding Affinity",
            Panel::Clinical => "Clinical Trial",
        }
    }

    pub fn property_ids(&self) -> &'static [&'static str] {
        match self {
            Panel::Admet => &["bbb", "caco2", "ppbr", "logp", "ames", "dili", "herg", "ld50"],
            Panel::Bbb => &["bbb", "logp", "caco2", "ppbr"],
            Panel::Toxicity => &["ames", "dili", "herg", "ld50"],
            Panel::Binding => &["ic50", "kd"],
            Panel::Clinical => &["clinical_phase1", "clinical_phase2", "clinical_phase3"],
        }
    }
}

/// Expand a panel into its property definitions, in panel order. Ids that do
/// not resolve in the registry are silently dropped.
pub fn panel_properties(panel: Panel) -> Vec<&'static PropertyDefinition> {
    panel
        .property_ids()
        .iter()
        .filter_map(|id| property_by_id(id))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_all_thirteen_properties() {
        assert_eq!(PROPERTY_DEFINITIONS.len(), 13);
        let mut ids: Vec<_> = PROPERTY_DEFINITIONS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 13, "property ids must be unique");
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let bbb = property_by_id("bbb").unwrap();
        assert_eq!(bbb.name, "Blood-Brain Barrier Penetration");
        assert_eq!(bbb.kind, PropertyKind::Classification);
        assert!(property_by_id("solubility").is_none());
    }

    #[test]
    fn test_classification_entries_carry_labels_and_polarity() {
        for def in PROPERTY_DEFINITIONS {
            match def.kind {
                PropertyKind::Classification => {
                    assert!(def.labels.is_some(), "{} missing labels", def.id);
                    assert!(def.favorable.is_some(), "{} missing polarity", def.id);
                }
                PropertyKind::Regression => {
                    assert!(def.labels.is_none(), "{} should not have labels", def.id);
                    assert!(def.favorable.is_none(), "{} should be neutral", def.id);
                }
            }
        }
    }

    #[test]
    fn test_polarity_direction() {
        assert_eq!(property_by_id("bbb").unwrap().favorable, Some(Label::B));
        assert_eq!(property_by_id("ames").unwrap().favorable, Some(Label::A));
        assert_eq!(property_by_id("herg").unwrap().favorable, Some(Label::A));
        assert_eq!(
            property_by_id("clinical_phase3").unwrap().favorable,
            Some(Label::B)
        );
    }

    #[test]
    fn test_panel_expansion_preserves_order() {
        let props = panel_properties(Panel::Bbb);
        let ids: Vec<_> = props.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["bbb", "logp", "caco2", "ppbr"]);
    }

    #[test]
    fn test_every_panel_id_resolves() {
        for panel in Panel::ALL {
            assert_eq!(
                panel_properties(panel).len(),
                panel.property_ids().len(),
                "panel {} references an unknown property",
                panel.as_str()
            );
        }
    }

    #[test]
    fn test_panel_parse_roundtrip() {
        for panel in Panel::ALL {
            assert_eq!(Panel::parse(panel.as_str()), Some(panel));
        }
        assert_eq!(Panel::parse("solubility"), None);
    }

    #[test]
    fn test_outcome_phrases() {
        let labels = property_by_id("dili").unwrap().labels.unwrap();
        assert_eq!(labels.phrase(Label::A), "No DILI risk");
        assert_eq!(labels.phrase(Label::B), "DILI risk");
    }
}
