//! elionyx-molecules — molecule-text utilities.
//!
//! Superficial SMILES validation (syntax only, not chemistry) and
//! scaffold/R-group combinatorial library generation for SAR exploration.

pub mod scaffold;
pub mod smiles;

pub use scaffold::{
    enumerate_library, substitute_sites, LibraryMember, RGroup, Scaffold, R_GROUPS, SCAFFOLDS,
};
pub use smiles::{validate_smiles, SmilesError};
