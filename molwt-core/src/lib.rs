//! Shared primitives for the molwt formula weight tools.
//!
//! `molwt-core` provides the foundation the other molwt crates build on:
//!
//! - **Error types** — [`MolwtError`] and [`Result`] for structured error handling
//! - **Traits** — [`Summarizable`] for one-line result summaries

pub mod error;
pub mod traits;

pub use error::{MolwtError, Result};
pub use traits::*;
