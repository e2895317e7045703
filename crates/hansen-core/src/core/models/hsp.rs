use serde::{Deserialize, Serialize};

/// A Hansen Solubility Parameter vector.
///
/// Splits a substance's cohesive energy into three contributions, each in
/// MPa^0.5: dispersion (`d`), polar (`p`), and hydrogen bonding (`h`).
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HspVector {
    /// Dispersion component (δD).
    pub d: f64,
    /// Polar component (δP).
    pub p: f64,
    /// Hydrogen-bonding component (δH).
    pub h: f64,
}

impl HspVector {
    pub const fn new(d: f64, p: f64, h: f64) -> Self {
        Self { d, p, h }
    }
}

/// A solute: an HSP vector plus its interaction radius `ro`.
///
/// `ro` defines the solubility sphere around the solute's position in HSP
/// space. The invariant `ro > 0` is not enforced here; the evaluator rejects
/// a non-positive radius once, before any per-solvent work
/// (see [`crate::core::solubility::scoring::Evaluator::new`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solute {
    /// Reference-table name, if the solute was resolved from the repository.
    pub name: Option<String>,
    pub hsp: HspVector,
    /// Interaction radius (Ro), in the same units as the HSP components.
    pub ro: f64,
}

impl Solute {
    pub fn new(hsp: HspVector, ro: f64) -> Self {
        Self {
            name: None,
            hsp,
            ro,
        }
    }

    pub fn named(name: impl Into<String>, hsp: HspVector, ro: f64) -> Self {
        Self {
            name: Some(name.into()),
            hsp,
            ro,
        }
    }

    /// Display label for plot output ("Solute" for ad hoc solutes).
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("Solute")
    }
}

/// A named candidate solvent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solvent {
    pub name: String,
    pub hsp: HspVector,
}

impl Solvent {
    pub fn new(name: impl Into<String>, hsp: HspVector) -> Self {
        Self {
            name: name.into(),
            hsp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solute_label_falls_back_to_generic_name() {
        let ad_hoc = Solute::new(HspVector::new(18.0, 5.0, 7.0), 4.0);
        assert_eq!(ad_hoc.label(), "Solute");

        let named = Solute::named("Curcumin", HspVector::new(18.2, 8.6, 11.5), 5.5);
        assert_eq!(named.label(), "Curcumin");
    }
}
