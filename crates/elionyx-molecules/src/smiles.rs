//! Superficial SMILES validation.
//!
//! A syntactic gate, not a chemistry parser: legal character set, balanced
//! parentheses and brackets, paired ring-closure digits. Anything deeper
//! (valence, aromaticity, stereo sanity) is the model's problem.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmilesError {
    #[error("SMILES string is empty")]
    Empty,
    #[error("Contains invalid characters")]
    InvalidCharacters,
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Unbalanced brackets")]
    UnbalancedBrackets,
    #[error("Unpaired ring-closure digits")]
    UnpairedRingClosure,
}

fn smiles_chars() -> &'static Regex {
    static SMILES_CHARS: OnceLock<Regex> = OnceLock::new();
    SMILES_CHARS.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9@+\-\[\]()\\/=#%.*:~{}|,;]+$").expect("valid charset pattern")
    })
}

/// Validate a SMILES string syntactically. Input is trimmed first.
pub fn validate_smiles(smiles: &str) -> Result<(), SmilesError> {
    let trimmed = smiles.trim();
    if trimmed.is_empty() {
        return Err(SmilesError::Empty);
    }
    if !smiles_chars().is_match(trimmed) {
        return Err(SmilesError::InvalidCharacters);
    }

    balanced(trimmed, '(', ')', SmilesError::UnbalancedParentheses)?;
    balanced(trimmed, '[', ']', SmilesError::UnbalancedBrackets)?;
    ring_closures_paired(trimmed)?;
    Ok(())
}

fn balanced(s: &str, open: char, close: char, err: SmilesError) -> Result<(), SmilesError> {
    let mut depth = 0i32;
    for ch in s.chars() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
        }
        if depth < 0 {
            return Err(err);
        }
    }
    if depth != 0 {
        return Err(err);
    }
    Ok(())
}

/// Ring-closure digits toggle open/close per occurrence; `%nn` two-digit
/// closures pair as a unit. Digits inside square brackets are atom
/// properties (isotopes, charges, H counts), never ring bonds.
fn ring_closures_paired(smiles: &str) -> Result<(), SmilesError> {
    // The charset gate guarantees ASCII, so byte indexing is safe here.
    let bytes = smiles.as_bytes();
    let mut open: HashSet<&str> = HashSet::new();
    let mut bracket_depth = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'[' => bracket_depth += 1,
            b']' => bracket_depth = bracket_depth.saturating_sub(1),
            b'%' if bracket_depth == 0 && i + 2 < bytes.len() => {
                let ring = &smiles[i..i + 3];
                if !open.remove(ring) {
                    open.insert(ring);
                }
                i += 2;
            }
            b'0'..=b'9' if bracket_depth == 0 => {
                let ring = &smiles[i..i + 1];
                if !open.remove(ring) {
                    open.insert(ring);
                }
            }
            _ => {}
        }
        i += 1;
    }
    if open.is_empty() {
        Ok(())
    } else {
        Err(SmilesError::UnpairedRingClosure)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
