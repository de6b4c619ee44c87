//! Element records held by the periodic index.

use molwt_core::{MolwtError, Result};

/// One element's identifying and physical data.
///
/// Records are validated on construction and immutable afterwards: the
/// symbol is one uppercase ASCII letter optionally followed by one lowercase
/// letter, and the atomic mass is finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementRecord {
    symbol: String,
    name: String,
    atomic_mass: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    atomic_number: Option<u32>,
}

impl ElementRecord {
    /// Build a record, rejecting malformed symbols, empty names and
    /// non-positive masses.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        atomic_mass: f64,
        atomic_number: Option<u32>,
    ) -> Result<Self> {
        let symbol = symbol.into();
        let name = name.into();

        if !is_valid_symbol(&symbol) {
            return Err(MolwtError::Parse(format!(
                "invalid element symbol '{symbol}'"
            )));
        }
        if name.trim().is_empty() {
            return Err(MolwtError::Parse(format!(
                "element '{symbol}' has no name"
            )));
        }
        if !atomic_mass.is_finite() || atomic_mass <= 0.0 {
            return Err(MolwtError::Parse(format!(
                "element '{symbol}' has non-positive atomic mass {atomic_mass}"
            )));
        }

        Ok(ElementRecord {
            symbol,
            name,
            atomic_mass,
            atomic_number,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Human-readable element name, as spelled in the source table.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atomic_mass(&self) -> f64 {
        self.atomic_mass
    }

    /// Atomic number, when the source table carries one.
    pub fn atomic_number(&self) -> Option<u32> {
        self.atomic_number
    }
}

fn is_valid_symbol(symbol: &str) -> bool {
    let bytes = symbol.as_bytes();
    match bytes {
        [first] => first.is_ascii_uppercase(),
        [first, second] => first.is_ascii_uppercase() && second.is_ascii_lowercase(),
        _ => false,
    }
}
