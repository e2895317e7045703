use crate::cli::EvalArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::parse_solute_params;
use hansen_core::workflows::evaluate::{self, EvaluationReport, EvaluationRequest, SoluteSpec};
use std::fs::File;
use std::path::Path;
use tracing::info;

pub fn run(args: EvalArgs) -> Result<()> {
    let mut repository = super::load_repository(args.tables.as_deref())?;
    if let Some(path) = &args.solvents_csv {
        let rows = repository.load_solvents_csv(path)?;
        info!("Imported {} solvent row(s) from {}.", rows, path.display());
    }

    let solute = match (&args.solute, &args.solute_params) {
        (Some(name), _) => SoluteSpec::Named(name.clone()),
        (None, Some(raw)) => parse_solute_params(raw)?,
        (None, None) => {
            return Err(CliError::Argument(
                "a solute is required: pass --solute NAME or --solute-params D,P,H,RO".to_string(),
            ));
        }
    };

    let solvents = if args.all_solvents {
        repository
            .solvents()
            .map(|(name, _)| name.to_string())
            .collect()
    } else {
        args.solvents.clone()
    };

    let request = EvaluationRequest::new(solute, solvents).at_temperature(args.temperature);
    let report = evaluate::run(&repository, &request)?;

    print_report(&report, &request);

    if let Some(path) = &args.output {
        write_json_report(path, &report)?;
        println!("JSON report written to {}.", path.display());
    }
    if let Some(path) = &args.csv {
        write_csv_report(path, &report)?;
        println!("CSV export written to {}.", path.display());
    }

    Ok(())
}

fn print_report(report: &EvaluationReport, request: &EvaluationRequest) {
    println!(
        "Solute: {} (δD {:.1}, δP {:.1}, δH {:.1}, Ro {:.1}) at {} °C",
        report.solute.label(),
        report.solute.hsp.d,
        report.solute.hsp.p,
        report.solute.hsp.h,
        report.solute.ro,
        request.temperature,
    );
    println!();
    println!(
        "{:<34} {:>6} {:>6} {:>6} {:>8} {:>7}  {:<18} {:>12}",
        "Solvent", "δD", "δP", "δH", "Ra", "RED", "Classification", "Solubility"
    );

    for (name, record) in &report.results {
        println!(
            "{:<34} {:>6.1} {:>6.1} {:>6.1} {:>8.2} {:>7.2}  {:<18} {:>12.4}",
            truncate(name, 34),
            record.d,
            record.p,
            record.h,
            record.ra,
            record.red,
            record.classification.label(),
            record.temp_corrected_solubility,
        );
    }

    let skipped = request.solvents.len() - report.results.len();
    println!();
    if skipped > 0 {
        println!(
            "{} of {} requested solvent(s) evaluated ({} unknown name(s) skipped).",
            report.results.len(),
            request.solvents.len(),
            skipped
        );
    } else {
        println!("{} solvent(s) evaluated.", report.results.len());
    }
}

fn write_json_report(path: &Path, report: &EvaluationReport) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

fn write_csv_report(path: &Path, report: &EvaluationReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "name",
        "d",
        "p",
        "h",
        "ra",
        "red",
        "classification",
        "temp_corrected_solubility",
    ])?;
    for (name, record) in &report.results {
        writer.write_record(&[
            name.clone(),
            record.d.to_string(),
            record.p.to_string(),
            record.h.to_string(),
            record.ra.to_string(),
            record.red.to_string(),
            record.classification.label().to_string(),
            record.temp_corrected_solubility.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn truncate(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let head: String = name.chars().take(max_chars - 1).collect();
        format!("{head}…")
    }
}
