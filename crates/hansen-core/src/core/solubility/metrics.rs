use super::SolubilityError;
use crate::core::models::hsp::HspVector;

/// Reference temperature of the tabulated HSP values.
pub const REFERENCE_TEMPERATURE: f64 = 25.0;

/// Linear solubility change per degree away from the reference temperature.
const TEMPERATURE_COEFFICIENT: f64 = 0.02;

/// Hansen distance Ra between two HSP vectors:
///
/// `Ra = sqrt(4(d1-d2)^2 + (p1-p2)^2 + (h1-h2)^2)`
///
/// The factor of 4 on the dispersion term is a fixed convention of the
/// Hansen model, not a tunable weight.
#[inline]
pub fn hansen_distance(a: &HspVector, b: &HspVector) -> f64 {
    let dd = a.d - b.d;
    let dp = a.p - b.p;
    let dh = a.h - b.h;
    (4.0 * dd * dd + dp * dp + dh * dh).sqrt()
}

/// Relative energy difference RED = Ra / Ro.
///
/// RED ≤ 1 means the solvent sits inside the solute's solubility sphere.
#[inline]
pub fn relative_energy_difference(ra: f64, ro: f64) -> Result<f64, SolubilityError> {
    if ro <= 0.0 {
        return Err(SolubilityError::NonPositiveRadius(ro));
    }
    Ok(ra / ro)
}

/// Inverse-RED solubility with a linear temperature correction:
///
/// `(1/RED) * (1 + 0.02 * (T - 25))`
///
/// At the reference temperature this is exactly the base solubility `1/RED`.
/// The heuristic performs no unit conversion and enforces no floor; for an
/// exact HSP match (RED = 0) the result is infinite.
#[inline]
pub fn temperature_corrected_solubility(red: f64, temperature: f64) -> f64 {
    let base = 1.0 / red;
    base * (1.0 + TEMPERATURE_COEFFICIENT * (temperature - REFERENCE_TEMPERATURE))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn distance_between_identical_vectors_is_zero() {
        let v = HspVector::new(18.2, 8.6, 11.5);
        assert!(f64_approx_equal(hansen_distance(&v, &v), 0.0));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = HspVector::new(15.5, 16.0, 42.3);
        let b = HspVector::new(18.0, 1.4, 2.0);
        assert!(f64_approx_equal(
            hansen_distance(&a, &b),
            hansen_distance(&b, &a)
        ));
    }

    #[test]
    fn dispersion_differences_are_weighted_four_times() {
        // A pure dispersion gap of 5 gives sqrt(4 * 25) = 10.
        let a = HspVector::new(15.0, 0.0, 0.0);
        let b = HspVector::new(20.0, 0.0, 0.0);
        assert!(f64_approx_equal(hansen_distance(&a, &b), 10.0));

        // The same gap on the polar axis is unweighted.
        let c = HspVector::new(15.0, 5.0, 0.0);
        let d = HspVector::new(15.0, 0.0, 0.0);
        assert!(f64_approx_equal(hansen_distance(&c, &d), 5.0));
    }

    #[test]
    fn red_is_distance_over_radius() {
        assert!(f64_approx_equal(
            relative_energy_difference(10.0, 5.0).unwrap(),
            2.0
        ));
    }

    #[test]
    fn red_rejects_zero_radius() {
        assert_eq!(
            relative_energy_difference(10.0, 0.0),
            Err(SolubilityError::NonPositiveRadius(0.0))
        );
    }

    #[test]
    fn red_rejects_negative_radius() {
        assert_eq!(
            relative_energy_difference(10.0, -4.8),
            Err(SolubilityError::NonPositiveRadius(-4.8))
        );
    }

    #[test]
    fn corrected_solubility_at_reference_temperature_equals_base_solubility() {
        let red = 1.25;
        assert_eq!(
            temperature_corrected_solubility(red, REFERENCE_TEMPERATURE),
            1.0 / red
        );
    }

    #[test]
    fn corrected_solubility_increases_monotonically_with_temperature() {
        let red = 2.0;
        let cold = temperature_corrected_solubility(red, 10.0);
        let warm = temperature_corrected_solubility(red, 40.0);
        let hot = temperature_corrected_solubility(red, 80.0);
        assert!(cold < warm && warm < hot);
    }

    #[test]
    fn corrected_solubility_of_exact_match_is_infinite() {
        assert!(temperature_corrected_solubility(0.0, 25.0).is_infinite());
    }
}
