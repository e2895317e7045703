use super::metrics;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sampled temperature domain: 101 points over 0..=100 inclusive.
pub const CURVE_START: f64 = 0.0;
pub const CURVE_END: f64 = 100.0;
pub const CURVE_SAMPLES: usize = 101;

/// Solubility-versus-temperature series for every evaluated solvent.
///
/// The samples exist purely for display; they are clamped at zero, unlike
/// the per-solvent corrected value in the evaluation record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureCurves {
    pub temperatures: Vec<f64>,
    /// Solvent name → one solubility sample per temperature.
    pub solubilities: BTreeMap<String, Vec<f64>>,
}

impl TemperatureCurves {
    pub fn new() -> Self {
        Self {
            temperatures: temperature_domain(),
            solubilities: BTreeMap::new(),
        }
    }

    /// Adds the curve for one solvent from its unrounded RED value.
    pub fn insert(&mut self, solvent_name: impl Into<String>, red: f64) {
        self.solubilities
            .insert(solvent_name.into(), solubility_curve(red));
    }
}

impl Default for TemperatureCurves {
    fn default() -> Self {
        Self::new()
    }
}

pub fn temperature_domain() -> Vec<f64> {
    let step = (CURVE_END - CURVE_START) / (CURVE_SAMPLES - 1) as f64;
    (0..CURVE_SAMPLES)
        .map(|i| CURVE_START + step * i as f64)
        .collect()
}

/// One solubility sample per domain temperature, floored at zero.
pub fn solubility_curve(red: f64) -> Vec<f64> {
    temperature_domain()
        .into_iter()
        .map(|t| metrics::temperature_corrected_solubility(red, t).max(0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_has_101_samples_from_zero_to_one_hundred() {
        let domain = temperature_domain();
        assert_eq!(domain.len(), CURVE_SAMPLES);
        assert_eq!(domain[0], 0.0);
        assert_eq!(domain[100], 100.0);
        assert_eq!(domain[25], 25.0);
    }

    #[test]
    fn curve_at_reference_temperature_equals_base_solubility() {
        let red = 2.0;
        let curve = solubility_curve(red);
        assert_eq!(curve[25], 1.0 / red);
    }

    #[test]
    fn curve_endpoints_follow_the_linear_correction() {
        let red = 2.0;
        let base = 1.0 / red;
        let curve = solubility_curve(red);
        // Factor is 0.5 at T=0 and 2.5 at T=100.
        assert!((curve[0] - base * 0.5).abs() < 1e-12);
        assert!((curve[100] - base * 2.5).abs() < 1e-12);
    }

    #[test]
    fn curves_collection_is_keyed_by_solvent_name() {
        let mut curves = TemperatureCurves::new();
        curves.insert("Ethanol", 1.5);
        curves.insert("Acetone", 0.8);

        assert_eq!(curves.solubilities.len(), 2);
        assert_eq!(curves.solubilities["Ethanol"].len(), CURVE_SAMPLES);
        assert!(curves.solubilities.contains_key("Acetone"));
    }
}
