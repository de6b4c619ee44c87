//! The periodic index: element records keyed by symbol, built from
//! comma-delimited table rows.

use std::collections::HashMap;

use molwt_core::{MolwtError, Result};

use crate::element::ElementRecord;

/// Field delimiter of the raw table rows.
pub const DELIMITER: char = ',';

/// Column of the atomic symbol when the header does not name one.
const DEFAULT_SYMBOL_COLUMN: usize = 1;

/// Maps element symbols to their records.
///
/// Built once from raw rows and never mutated afterwards, so a single index
/// can be shared by any number of evaluations.
#[derive(Debug, Clone, Default)]
pub struct PeriodicIndex {
    elements: HashMap<String, ElementRecord>,
}

/// Positions of the columns the index cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    symbol: usize,
    name: usize,
    mass: usize,
    number: Option<usize>,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<String> = split_fields(header).map(normalize_header).collect();

        let symbol = match position(&names, &["atomic_symbol", "symbol"]) {
            Some(i) => i,
            None if names.len() > DEFAULT_SYMBOL_COLUMN => DEFAULT_SYMBOL_COLUMN,
            None => {
                return Err(MolwtError::Parse(
                    "header has no atomic symbol column".into(),
                ))
            }
        };
        let name = position(&names, &["element_name", "name"])
            .ok_or_else(|| MolwtError::Parse("header has no element name column".into()))?;
        let mass = position(&names, &["atomic_mass", "atomic_weight"])
            .ok_or_else(|| MolwtError::Parse("header has no atomic mass column".into()))?;
        let number = position(&names, &["atomic_number", "number"]);

        if symbol == name || symbol == mass {
            return Err(MolwtError::Parse(
                "atomic symbol column overlaps another required column".into(),
            ));
        }

        Ok(Columns {
            symbol,
            name,
            mass,
            number,
        })
    }
}

impl PeriodicIndex {
    /// Build an index from ordered rows; the first non-blank row is the header.
    ///
    /// Rows with an empty symbol field are skipped. Any other malformed row
    /// fails the whole construction.
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row))
            .filter(|(_, row)| !row.as_ref().trim().is_empty());

        let (_, header) = rows
            .next()
            .ok_or_else(|| MolwtError::TableUnavailable("table has no header row".into()))?;
        let columns = Columns::from_header(header.as_ref())?;

        let mut elements = HashMap::new();
        let mut skipped = 0usize;

        for (line, row) in rows {
            let fields: Vec<&str> = split_fields(row.as_ref()).collect();
            let field = |i: usize| fields.get(i).copied().unwrap_or("");

            let symbol = field(columns.symbol);
            if symbol.is_empty() {
                log::debug!("line {line}: no atomic symbol, skipping");
                skipped += 1;
                continue;
            }

            let mass_text = field(columns.mass);
            let atomic_mass: f64 = mass_text.parse().map_err(|_| {
                MolwtError::Parse(format!(
                    "line {line}: invalid atomic mass '{mass_text}' for '{symbol}'"
                ))
            })?;
            let atomic_number = match columns.number.map(field) {
                None | Some("") => None,
                Some(text) => Some(text.parse::<u32>().map_err(|_| {
                    MolwtError::Parse(format!(
                        "line {line}: invalid atomic number '{text}' for '{symbol}'"
                    ))
                })?),
            };

            let record = ElementRecord::new(symbol, field(columns.name), atomic_mass, atomic_number)
                .map_err(|e| at_line(line, e))?;

            if let Some(previous) = elements.insert(symbol.to_string(), record) {
                log::warn!(
                    "line {line}: symbol '{}' appears more than once, replacing earlier row",
                    previous.symbol()
                );
            }
        }

        log::debug!(
            "periodic index built: {} elements, {} rows skipped",
            elements.len(),
            skipped
        );
        Ok(PeriodicIndex { elements })
    }

    /// Build an index from the full text of a table.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::from_rows(text.lines())
    }

    /// Look up a symbol, failing with [`MolwtError::UnknownElement`].
    pub fn get(&self, symbol: &str) -> Result<&ElementRecord> {
        self.elements
            .get(symbol)
            .ok_or_else(|| MolwtError::UnknownElement(symbol.to_string()))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All indexed symbols, sorted by atomic number where known, then by symbol.
    pub fn symbols(&self) -> Vec<&str> {
        let mut records: Vec<&ElementRecord> = self.elements.values().collect();
        records.sort_by(|a, b| {
            let key = |r: &ElementRecord| r.atomic_number().unwrap_or(u32::MAX);
            key(a).cmp(&key(b)).then_with(|| a.symbol().cmp(b.symbol()))
        });
        records.into_iter().map(ElementRecord::symbol).collect()
    }
}

fn split_fields(row: &str) -> impl Iterator<Item = &str> {
    row.trim().split(DELIMITER).map(str::trim)
}

fn position(names: &[String], aliases: &[&str]) -> Option<usize> {
    names.iter().position(|n| aliases.contains(&n.as_str()))
}

fn normalize_header(field: &str) -> String {
    field
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

fn at_line(line: usize, err: MolwtError) -> MolwtError {
    match err {
        MolwtError::Parse(msg) => MolwtError::Parse(format!("line {line}: {msg}")),
        other => other,
    }
}
