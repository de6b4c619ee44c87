//! Formula tokenizer.
//!
//! Splits a compound string such as `"H2O"` into runs, each one uppercase
//! ASCII letter followed by any lowercase letters and then any digits.
//! Whitespace and hyphens are dropped first; any other character that cannot
//! start a run is skipped.

use std::fmt;

use molwt_core::{MolwtError, Result};

/// One element symbol with its optional quantity suffix, e.g. `"Cl2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    text: String,
    digits_at: usize,
}

impl Run {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The leading letters of the run.
    pub fn symbol(&self) -> &str {
        &self.text[..self.digits_at]
    }

    /// The trailing digits of the run, if any.
    pub fn digits(&self) -> Option<&str> {
        let digits = &self.text[self.digits_at..];
        (!digits.is_empty()).then_some(digits)
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Remove characters that never carry meaning in a formula.
pub fn clean(formula: &str) -> String {
    formula
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Tokenize a compound string into runs, in left-to-right order.
///
/// Fails with [`MolwtError::InvalidFormula`] when no run is found, or when a
/// run's quantity is zero or does not fit in a `u32`.
pub fn tokenize(formula: &str) -> Result<Vec<Run>> {
    let cleaned = clean(formula);
    let mut scanner = Scanner::new(&cleaned);
    let mut runs = Vec::new();

    while let Some(run) = scanner.next_run() {
        if let Some(digits) = run.digits() {
            match digit_value(digits) {
                Some(0) => {
                    return Err(MolwtError::InvalidFormula(format!(
                        "'{run}' has a zero quantity"
                    )))
                }
                None => {
                    return Err(MolwtError::InvalidFormula(format!(
                        "'{run}' has a quantity that is too large"
                    )))
                }
                Some(_) => {}
            }
        }
        runs.push(run);
    }

    if runs.is_empty() {
        return Err(MolwtError::InvalidFormula(format!(
            "no element symbols found in '{}'",
            formula.trim()
        )));
    }
    Ok(runs)
}

/// Value of an all-digit string, `None` on overflow.
pub(crate) fn digit_value(digits: &str) -> Option<u32> {
    digits.bytes().try_fold(0u32, |acc, b| {
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

/// Two-state scan: letters of a symbol, then digits of its quantity.
struct Scanner<'a> {
    input: &'a [u8],
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Scanner {
            input: text.as_bytes(),
            text,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while matches!(self.peek(), Some(b) if pred(b)) {
            self.pos += 1;
        }
    }

    fn next_run(&mut self) -> Option<Run> {
        // Non-ASCII bytes are never uppercase ASCII, so skipping byte-wise
        // always lands on a char boundary when a run starts.
        while !self.peek()?.is_ascii_uppercase() {
            self.pos += 1;
        }

        let start = self.pos;
        self.pos += 1;
        self.eat_while(|b| b.is_ascii_lowercase());
        let digits_at = self.pos;
        self.eat_while(|b| b.is_ascii_digit());

        Some(Run {
            text: self.text[start..self.pos].to_string(),
            digits_at: digits_at - start,
        })
    }
}
