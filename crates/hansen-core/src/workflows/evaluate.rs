use crate::core::models::evaluation::SolventEvaluation;
use crate::core::models::hsp::{HspVector, Solute, Solvent};
use crate::core::registry::repository::ParameterRepository;
use crate::core::solubility::SolubilityError;
use crate::core::solubility::curve::TemperatureCurves;
use crate::core::solubility::metrics::REFERENCE_TEMPERATURE;
use crate::core::solubility::scoring::Evaluator;
use crate::viz::plot::{self, PlotData};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// How the caller identifies the solute: by reference-table name or with
/// explicit parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SoluteSpec {
    Named(String),
    Params { d: f64, p: f64, h: f64, ro: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    pub solute: SoluteSpec,
    /// Candidate solvent names; unknown names are skipped, not rejected.
    pub solvents: Vec<String>,
    pub temperature: f64,
}

impl EvaluationRequest {
    pub fn new(solute: SoluteSpec, solvents: Vec<String>) -> Self {
        Self {
            solute,
            solvents,
            temperature: REFERENCE_TEMPERATURE,
        }
    }

    pub fn at_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Client-input errors. The computation itself cannot fail once these
/// checks pass; there is no fatal class in this pipeline.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("unknown solute '{0}'")]
    UnknownSolute(String),

    #[error(transparent)]
    Solubility(#[from] SolubilityError),

    #[error("no solvents selected")]
    EmptySolventSelection,
}

/// Complete response for one evaluation request. Computed fresh per call and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// The resolved solute the evaluation ran against.
    pub solute: Solute,
    /// Solvent name → evaluation record, in name order. May be smaller than
    /// the request if names were unknown.
    pub results: BTreeMap<String, SolventEvaluation>,
    pub plot: PlotData,
    pub temperature_curves: TemperatureCurves,
}

/// Evaluates a solute against the requested solvents.
///
/// Input validation happens up front: the solute must resolve, its radius
/// must be positive, and the selection must be non-empty. Unknown solvent
/// names are logged and skipped, so the result set may be smaller than the
/// request (or even empty).
#[instrument(skip_all, name = "evaluation_workflow")]
pub fn run(
    repository: &ParameterRepository,
    request: &EvaluationRequest,
) -> Result<EvaluationReport, EvaluationError> {
    let solute = resolve_solute(repository, &request.solute)?;
    let evaluator = Evaluator::new(&solute, request.temperature)?;

    if request.solvents.is_empty() {
        return Err(EvaluationError::EmptySolventSelection);
    }

    let mut results = BTreeMap::new();
    let mut curves = TemperatureCurves::new();

    for name in &request.solvents {
        let Some(hsp) = repository.solvent(name) else {
            warn!("Solvent '{}' not found, skipping.", name);
            continue;
        };
        let solvent = Solvent::new(name.clone(), *hsp);
        curves.insert(name.clone(), evaluator.relative_energy_difference(&solvent));
        results.insert(name.clone(), evaluator.evaluate(&solvent));
    }

    info!(
        "Evaluated {} of {} requested solvent(s) against '{}' at {} °C.",
        results.len(),
        request.solvents.len(),
        solute.label(),
        request.temperature
    );

    let plot = plot::build_plot_data(&solute, &results);
    Ok(EvaluationReport {
        solute,
        results,
        plot,
        temperature_curves: curves,
    })
}

fn resolve_solute(
    repository: &ParameterRepository,
    spec: &SoluteSpec,
) -> Result<Solute, EvaluationError> {
    match spec {
        SoluteSpec::Named(name) => {
            let record = repository
                .solute(name)
                .ok_or_else(|| EvaluationError::UnknownSolute(name.clone()))?;
            Ok(Solute::named(name.clone(), record.hsp, record.ro))
        }
        SoluteSpec::Params { d, p, h, ro } => {
            Ok(Solute::new(HspVector::new(*d, *p, *h), *ro))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::evaluation::Classification;
    use crate::core::registry::tables::SoluteRecord;
    use crate::core::solubility::curve::CURVE_SAMPLES;

    fn fake_repository() -> ParameterRepository {
        ParameterRepository::from_entries(
            [
                ("Near".to_string(), HspVector::new(18.0, 0.0, 0.0)),
                ("Far".to_string(), HspVector::new(30.0, 20.0, 20.0)),
            ],
            [(
                "Probe".to_string(),
                SoluteRecord {
                    hsp: HspVector::new(18.0, 0.0, 0.0),
                    ro: 5.0,
                },
            )],
        )
    }

    fn request_for(solvents: &[&str]) -> EvaluationRequest {
        EvaluationRequest::new(
            SoluteSpec::Named("Probe".to_string()),
            solvents.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn named_solute_resolves_through_the_repository() {
        let report = run(&fake_repository(), &request_for(&["Near"])).unwrap();
        let record = &report.results["Near"];

        assert_eq!(record.ra, 0.0);
        assert_eq!(record.red, 0.0);
        assert_eq!(record.classification, Classification::Soluble);
    }

    #[test]
    fn explicit_solute_params_are_honored() {
        let request = EvaluationRequest::new(
            SoluteSpec::Params {
                d: 15.0,
                p: 0.0,
                h: 0.0,
                ro: 1.0,
            },
            vec!["Near".to_string()],
        );
        let report = run(&fake_repository(), &request).unwrap();
        let record = &report.results["Near"];

        // Ra = sqrt(4 * 3^2) = 6, RED = 6.
        assert_eq!(record.ra, 6.0);
        assert_eq!(record.red, 6.0);
        assert_eq!(record.classification, Classification::Insoluble);
    }

    #[test]
    fn unknown_solvent_names_are_skipped_without_error() {
        let report = run(&fake_repository(), &request_for(&["Near", "Nope", "Far"])).unwrap();

        assert_eq!(report.results.len(), 2);
        assert!(!report.results.contains_key("Nope"));
        assert_eq!(report.plot.solvents.len(), 2);
        assert_eq!(report.temperature_curves.solubilities.len(), 2);
    }

    #[test]
    fn all_unknown_solvents_yield_an_empty_result_set() {
        let report = run(&fake_repository(), &request_for(&["Nope", "Nada"])).unwrap();
        assert!(report.results.is_empty());
        assert!(report.plot.solvents.is_empty());
    }

    #[test]
    fn empty_solvent_selection_is_rejected() {
        let err = run(&fake_repository(), &request_for(&[])).unwrap_err();
        assert!(matches!(err, EvaluationError::EmptySolventSelection));
    }

    #[test]
    fn unknown_solute_name_is_rejected() {
        let request = EvaluationRequest::new(
            SoluteSpec::Named("Mystery".to_string()),
            vec!["Near".to_string()],
        );
        let err = run(&fake_repository(), &request).unwrap_err();
        assert!(matches!(err, EvaluationError::UnknownSolute(name) if name == "Mystery"));
    }

    #[test]
    fn non_positive_radius_fails_before_any_per_solvent_work() {
        let request = EvaluationRequest::new(
            SoluteSpec::Params {
                d: 18.0,
                p: 0.0,
                h: 0.0,
                ro: 0.0,
            },
            // An unknown name would be skipped later; the radius check
            // must fire first.
            vec!["Nope".to_string()],
        );
        let err = run(&fake_repository(), &request).unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::Solubility(SolubilityError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn report_carries_curves_over_the_full_domain() {
        let report = run(
            &fake_repository(),
            &request_for(&["Far"]),
        )
        .unwrap();
        let curve = &report.temperature_curves.solubilities["Far"];
        assert_eq!(curve.len(), CURVE_SAMPLES);
        assert_eq!(report.temperature_curves.temperatures.len(), CURVE_SAMPLES);
    }

    #[test]
    fn requested_temperature_feeds_the_corrected_value() {
        let hot = request_for(&["Far"]).at_temperature(75.0);
        let cold = request_for(&["Far"]).at_temperature(25.0);

        let hot_value = run(&fake_repository(), &hot).unwrap().results["Far"]
            .temp_corrected_solubility;
        let cold_value = run(&fake_repository(), &cold).unwrap().results["Far"]
            .temp_corrected_solubility;
        assert!(hot_value > cold_value);
    }
}
