//! Molecular weight of chemical compounds from their formulas.
//!
//! The pipeline runs in four stages: a [`PeriodicIndex`] is built once from
//! comma-delimited table rows, a formula is [`tokenize`]d into runs, each run
//! is split into a [`Component`], and [`evaluate`] folds the components
//! against the index into a [`CompoundWeight`].
//!
//! # Example
//!
//! ```
//! use molwt_chem::{formula_weight, PeriodicIndex};
//!
//! let index = PeriodicIndex::from_csv_str(
//!     "atomic number,atomic symbol,element name,atomic mass\n\
//!      1,H,Hydrogen,1.008\n\
//!      8,O,Oxygen,15.999\n",
//! )
//! .unwrap();
//!
//! let water = formula_weight("H2O", &index).unwrap();
//! assert!((water.total - 18.015).abs() < 1e-9);
//! assert_eq!(water.names(), vec!["Hydrogen", "Oxygen"]);
//! ```

pub mod element;
pub mod index;
pub mod quantity;
pub mod table;
pub mod tokenizer;
pub mod weight;

pub use element::ElementRecord;
pub use index::PeriodicIndex;
pub use quantity::{parse_formula, parse_run, parse_runs, Component};
pub use tokenizer::{tokenize, Run};
pub use weight::{evaluate, formula_weight, CompoundWeight, WeightedComponent};

#[cfg(feature = "std")]
pub use table::read_periodic_table;
