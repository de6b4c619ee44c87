//! Quantity parsing: turns each run into a `(symbol, quantity)` component.

use molwt_core::Result;

use crate::tokenizer::{digit_value, tokenize, Run};

/// One element symbol with how many atoms of it appear at that position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Component {
    pub symbol: String,
    pub quantity: u32,
}

impl Component {
    pub fn new(symbol: impl Into<String>, quantity: u32) -> Self {
        Component {
            symbol: symbol.into(),
            quantity,
        }
    }
}

/// Split a run at its digit suffix. A run without digits has quantity 1.
pub fn parse_run(run: &Run) -> Component {
    // Runs from `tokenize` always carry a non-zero, in-range suffix.
    let quantity = run.digits().and_then(digit_value).unwrap_or(1);
    Component::new(run.symbol(), quantity)
}

/// Parse every run, preserving order.
pub fn parse_runs(runs: &[Run]) -> Vec<Component> {
    runs.iter().map(parse_run).collect()
}

/// Tokenize and parse a formula in one step.
pub fn parse_formula(formula: &str) -> Result<Vec<Component>> {
    Ok(parse_runs(&tokenize(formula)?))
}
