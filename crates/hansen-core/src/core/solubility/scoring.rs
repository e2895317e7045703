use super::SolubilityError;
use super::metrics;
use crate::core::models::evaluation::{Classification, SolventEvaluation};
use crate::core::models::hsp::{Solute, Solvent};

/// Scores candidate solvents against one solute at one temperature.
///
/// The `ro > 0` invariant is checked once at construction, so the
/// per-solvent path is infallible: the Hansen formulas are total over real
/// inputs.
#[derive(Debug)]
pub struct Evaluator<'a> {
    solute: &'a Solute,
    temperature: f64,
}

impl<'a> Evaluator<'a> {
    pub fn new(solute: &'a Solute, temperature: f64) -> Result<Self, SolubilityError> {
        if solute.ro <= 0.0 {
            return Err(SolubilityError::NonPositiveRadius(solute.ro));
        }
        Ok(Self {
            solute,
            temperature,
        })
    }

    pub fn solute(&self) -> &Solute {
        self.solute
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Unrounded RED for a solvent; used by the temperature-curve sampler.
    #[inline]
    pub fn relative_energy_difference(&self, solvent: &Solvent) -> f64 {
        metrics::hansen_distance(&self.solute.hsp, &solvent.hsp) / self.solute.ro
    }

    /// Full per-solvent record, with display rounding applied.
    pub fn evaluate(&self, solvent: &Solvent) -> SolventEvaluation {
        let ra = metrics::hansen_distance(&self.solute.hsp, &solvent.hsp);
        let red = ra / self.solute.ro;
        SolventEvaluation {
            d: solvent.hsp.d,
            p: solvent.hsp.p,
            h: solvent.hsp.h,
            ra: round2(ra),
            red: round2(red),
            classification: Classification::from_red(red),
            temp_corrected_solubility: round4(metrics::temperature_corrected_solubility(
                red,
                self.temperature,
            )),
        }
    }

    pub fn evaluate_set(&self, solvents: &[Solvent]) -> Vec<SolventEvaluation> {
        solvents.iter().map(|s| self.evaluate(s)).collect()
    }
}

#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[inline]
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::hsp::HspVector;

    #[test]
    fn exact_hsp_match_has_zero_distance_and_is_soluble() {
        let solute = Solute::new(HspVector::new(18.0, 0.0, 0.0), 5.0);
        let evaluator = Evaluator::new(&solute, 25.0).unwrap();
        let record = evaluator.evaluate(&Solvent::new("Match", HspVector::new(18.0, 0.0, 0.0)));

        assert_eq!(record.ra, 0.0);
        assert_eq!(record.red, 0.0);
        assert_eq!(record.classification, Classification::Soluble);
        assert!(record.temp_corrected_solubility.is_infinite());
    }

    #[test]
    fn distant_solvent_with_tight_radius_is_insoluble() {
        let solute = Solute::new(HspVector::new(15.0, 0.0, 0.0), 1.0);
        let evaluator = Evaluator::new(&solute, 25.0).unwrap();
        let record = evaluator.evaluate(&Solvent::new("Far", HspVector::new(20.0, 0.0, 0.0)));

        assert_eq!(record.ra, 10.0);
        assert_eq!(record.red, 10.0);
        assert_eq!(record.classification, Classification::Insoluble);
    }

    #[test]
    fn distance_and_red_are_rounded_to_two_decimals() {
        // Curcumin vs Ethanol: Ra = sqrt(4*2.4^2 + 0.2^2 + 7.9^2) = 9.2460...
        let solute = Solute::new(HspVector::new(18.2, 8.6, 11.5), 5.5);
        let evaluator = Evaluator::new(&solute, 25.0).unwrap();
        let record = evaluator.evaluate(&Solvent::new("Ethanol", HspVector::new(15.8, 8.8, 19.4)));

        assert_eq!(record.ra, 9.25);
        assert_eq!(record.red, 1.68);
        assert_eq!(record.classification, Classification::Insoluble);
    }

    #[test]
    fn classification_uses_unrounded_red() {
        // red = 1.504: rounds to 1.50 for display but must classify as
        // Insoluble from the raw value.
        let solute = Solute::new(HspVector::new(10.0, 0.0, 0.0), 1.0);
        let evaluator = Evaluator::new(&solute, 25.0).unwrap();
        let record = evaluator.evaluate(&Solvent::new("Edge", HspVector::new(10.752, 0.0, 0.0)));

        assert_eq!(record.red, 1.5);
        assert_eq!(record.classification, Classification::Insoluble);
    }

    #[test]
    fn corrected_solubility_at_reference_temperature_is_rounded_base() {
        let solute = Solute::new(HspVector::new(15.0, 0.0, 0.0), 1.0);
        let evaluator = Evaluator::new(&solute, 25.0).unwrap();
        // red = 3, base = 1/3 -> 0.3333 after four-decimal rounding.
        let record = evaluator.evaluate(&Solvent::new("S", HspVector::new(16.5, 0.0, 0.0)));
        assert_eq!(record.temp_corrected_solubility, 0.3333);
    }

    #[test]
    fn evaluator_rejects_non_positive_radius() {
        let zero = Solute::new(HspVector::new(18.0, 5.0, 3.0), 0.0);
        assert_eq!(
            Evaluator::new(&zero, 25.0).unwrap_err(),
            SolubilityError::NonPositiveRadius(0.0)
        );

        let negative = Solute::new(HspVector::new(18.0, 5.0, 3.0), -2.0);
        assert_eq!(
            Evaluator::new(&negative, 25.0).unwrap_err(),
            SolubilityError::NonPositiveRadius(-2.0)
        );
    }

    #[test]
    fn evaluate_set_produces_one_record_per_solvent() {
        let solute = Solute::new(HspVector::new(18.0, 5.0, 3.0), 4.0);
        let evaluator = Evaluator::new(&solute, 25.0).unwrap();
        let solvents = vec![
            Solvent::new("A", HspVector::new(18.0, 5.0, 3.0)),
            Solvent::new("B", HspVector::new(14.0, 2.0, 9.0)),
        ];
        assert_eq!(evaluator.evaluate_set(&solvents).len(), 2);
    }
}
