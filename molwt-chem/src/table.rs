//! Table sources: the bundled periodic table and table files on disk.

use molwt_core::Result;
#[cfg(feature = "std")]
use molwt_core::MolwtError;

use crate::index::PeriodicIndex;

/// The periodic table shipped with the crate.
pub const BUILTIN_TABLE: &str = include_str!("../data/periodic_table.csv");

/// Build an index from the bundled table.
pub fn builtin() -> Result<PeriodicIndex> {
    PeriodicIndex::from_csv_str(BUILTIN_TABLE)
}

/// Read a table file from disk and build an index from it.
///
/// Any failure to read the file is reported as
/// [`MolwtError::TableUnavailable`]; malformed contents are a parse error.
#[cfg(feature = "std")]
pub fn read_periodic_table(path: impl AsRef<std::path::Path>) -> Result<PeriodicIndex> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        MolwtError::TableUnavailable(format!("{}: {}", path.display(), e))
    })?;
    log::debug!("read periodic table from {}", path.display());
    PeriodicIndex::from_csv_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_skips_missing_symbol() {
        let index = builtin().unwrap();
        assert_eq!(index.len(), 117);
        assert!(index.contains("Og"));
        assert!(!index.contains("Ts"));
    }

    #[test]
    fn builtin_table_values() {
        let index = builtin().unwrap();
        let h = index.get("H").unwrap();
        assert_eq!(h.name(), "Hydrogen");
        assert_eq!(h.atomic_number(), Some(1));
        assert!((index.get("O").unwrap().atomic_mass() - 15.999).abs() < 1e-12);
        assert_eq!(index.symbols().first(), Some(&"H"));
        assert_eq!(index.symbols().last(), Some(&"Og"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn reads_table_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "atomic number,atomic symbol,element name,atomic mass").unwrap();
        writeln!(file, "1,H,Hydrogen,1.008").unwrap();
        writeln!(file, "8,O,Oxygen,15.999").unwrap();
        file.flush().unwrap();

        let index = read_periodic_table(file.path()).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[cfg(feature = "std")]
    #[test]
    fn missing_file_is_table_unavailable() {
        match read_periodic_table("/nonexistent/periodic_table.csv") {
            Err(MolwtError::TableUnavailable(msg)) => {
                assert!(msg.contains("periodic_table.csv"), "{msg}")
            }
            other => panic!("expected TableUnavailable, got {other:?}"),
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn empty_file_is_table_unavailable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            read_periodic_table(file.path()),
            Err(MolwtError::TableUnavailable(_))
        ));
    }
}
