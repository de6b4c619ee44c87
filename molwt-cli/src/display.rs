//! User-facing output of a computed weight.

use molwt_chem::CompoundWeight;
use molwt_core::{MolwtError, Result};

/// Title-case each word: `"hydrogen"` becomes `"Hydrogen"`.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The two-line text report for a compound.
pub fn render_text(weight: &CompoundWeight, precision: usize) -> String {
    let names: Vec<String> = weight.names().into_iter().map(title_case).collect();
    format!(
        "The compound is composed of:  {}\nThe atomic weight of the compound is {:.*}\n",
        names.join(" "),
        precision,
        weight.total
    )
}

pub fn render_json(weight: &CompoundWeight) -> Result<String> {
    serde_json::to_string_pretty(weight).map_err(|e| MolwtError::Io(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use molwt_chem::{formula_weight, PeriodicIndex};

    fn water() -> CompoundWeight {
        let index = PeriodicIndex::from_csv_str(
            "atomic symbol,element name,atomic mass\nH,hydrogen,1.008\nO,OXYGEN,15.999\n",
        )
        .unwrap();
        formula_weight("H2O", &index).unwrap()
    }

    #[test]
    fn title_cases_names() {
        assert_eq!(title_case("hydrogen"), "Hydrogen");
        assert_eq!(title_case("OXYGEN"), "Oxygen");
        assert_eq!(title_case("rare  earth"), "Rare Earth");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn text_report() {
        assert_eq!(
            render_text(&water(), 3),
            "The compound is composed of:  Hydrogen Oxygen\n\
             The atomic weight of the compound is 18.015\n"
        );
    }

    #[test]
    fn precision_is_honored() {
        assert!(render_text(&water(), 1).ends_with("is 18.0\n"));
    }

    #[test]
    fn json_report() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&water()).unwrap()).unwrap();
        assert_eq!(json["components"][0]["symbol"], "H");
        assert_eq!(json["components"][0]["quantity"], 2);
        assert!((json["total"].as_f64().unwrap() - 18.015).abs() < 1e-9);
    }
}
