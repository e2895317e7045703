use crate::error::{CliError, Result};
use hansen_core::workflows::evaluate::SoluteSpec;

/// Parses the `--solute-params` argument: four comma-separated numbers
/// `D,P,H,RO`.
pub fn parse_solute_params(raw: &str) -> Result<SoluteSpec> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(CliError::Argument(format!(
            "--solute-params expects four comma-separated numbers D,P,H,RO, got '{}'",
            raw
        )));
    }

    let mut values = [0.0_f64; 4];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field.parse().map_err(|_| {
            CliError::Argument(format!("'{}' is not a valid number in --solute-params", field))
        })?;
    }

    let [d, p, h, ro] = values;
    Ok(SoluteSpec::Params { d, p, h, ro })
}
