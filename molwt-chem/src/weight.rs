//! Molecular weight evaluation against a periodic index.

use molwt_core::{Result, Summarizable};

use crate::index::PeriodicIndex;
use crate::quantity::{parse_formula, Component};

/// One component after lookup, with its share of the total weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightedComponent {
    pub symbol: String,
    pub name: String,
    pub quantity: u32,
    pub contribution: f64,
}

/// Total weight of a compound plus its components in formula order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompoundWeight {
    pub total: f64,
    pub components: Vec<WeightedComponent>,
}

impl CompoundWeight {
    /// Element names, one per component, in formula order.
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    /// The formula as evaluated: cleaned, quantities of 1 omitted.
    pub fn formula(&self) -> String {
        let mut formula = String::new();
        for c in &self.components {
            formula.push_str(&c.symbol);
            if c.quantity > 1 {
                formula.push_str(&c.quantity.to_string());
            }
        }
        formula
    }
}

impl Summarizable for CompoundWeight {
    fn summary(&self) -> String {
        format!(
            "MW={:.3} Formula={} Elements={}",
            self.total,
            self.formula(),
            self.names().join(" ")
        )
    }
}

/// Fold parsed components into a total weight.
///
/// Fails with [`molwt_core::MolwtError::UnknownElement`] on the first symbol
/// the index does not hold; no partial weight is returned.
pub fn evaluate(components: &[Component], index: &PeriodicIndex) -> Result<CompoundWeight> {
    let mut total = 0.0;
    let mut weighted = Vec::with_capacity(components.len());

    for component in components {
        let record = index.get(&component.symbol)?;
        let contribution = record.atomic_mass() * f64::from(component.quantity);
        total += contribution;
        weighted.push(WeightedComponent {
            symbol: component.symbol.clone(),
            name: record.name().to_string(),
            quantity: component.quantity,
            contribution,
        });
    }

    Ok(CompoundWeight {
        total,
        components: weighted,
    })
}

/// Run the whole pipeline on a formula string.
pub fn formula_weight(formula: &str, index: &PeriodicIndex) -> Result<CompoundWeight> {
    let components = parse_formula(formula)?;
    evaluate(&components, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use molwt_core::MolwtError;

    fn index() -> PeriodicIndex {
        PeriodicIndex::from_csv_str(
            "atomic number,atomic symbol,element name,atomic mass\n\
             1,H,Hydrogen,1.008\n\
             6,C,Carbon,12.011\n\
             8,O,Oxygen,15.999\n\
             11,Na,Sodium,22.990\n\
             17,Cl,Chlorine,35.45\n",
        )
        .unwrap()
    }

    #[test]
    fn water_end_to_end() {
        let w = formula_weight("H2O", &index()).unwrap();
        assert!((w.total - 18.015).abs() < 1e-9, "got {}", w.total);
        assert_eq!(w.names(), vec!["Hydrogen", "Oxygen"]);
    }

    #[test]
    fn contributions_sum_to_total() {
        let w = formula_weight("C6H12O6", &index()).unwrap();
        let sum: f64 = w.components.iter().map(|c| c.contribution).sum();
        assert!((sum - w.total).abs() < 1e-9);
        assert!((w.components[1].contribution - 12.0 * 1.008).abs() < 1e-9);
    }

    #[test]
    fn names_follow_formula_order_with_repeats() {
        let w = formula_weight("CH3COOH", &index()).unwrap();
        assert_eq!(
            w.names(),
            vec!["Carbon", "Hydrogen", "Carbon", "Oxygen", "Oxygen", "Hydrogen"]
        );
    }

    #[test]
    fn unknown_element_aborts() {
        let components = vec![Component::new("Na", 1), Component::new("Xy", 2)];
        match evaluate(&components, &index()) {
            Err(MolwtError::UnknownElement(sym)) => assert_eq!(sym, "Xy"),
            other => panic!("expected UnknownElement, got {other:?}"),
        }
    }

    #[test]
    fn invalid_formula_surfaces() {
        assert!(matches!(
            formula_weight("123", &index()),
            Err(MolwtError::InvalidFormula(_))
        ));
    }

    #[test]
    fn empty_components_weigh_nothing() {
        let w = evaluate(&[], &index()).unwrap();
        assert_eq!(w.total, 0.0);
        assert!(w.names().is_empty());
    }

    #[test]
    fn evaluation_is_repeatable() {
        let idx = index();
        let a = formula_weight("NaCl", &idx).unwrap();
        let b = formula_weight("NaCl", &idx).unwrap();
        assert_eq!(a.total.to_bits(), b.total.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn formula_and_summary() {
        let w = formula_weight("H-2 O", &index()).unwrap();
        assert_eq!(w.formula(), "H2O");
        assert_eq!(w.summary(), "MW=18.015 Formula=H2O Elements=Hydrogen Oxygen");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_json() {
        let w = formula_weight("NaCl", &index()).unwrap();
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["components"][0]["name"], "Sodium");
        assert_eq!(json["components"][1]["quantity"], 1);
    }
}
