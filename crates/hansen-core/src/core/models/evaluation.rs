use serde::Serialize;
use std::fmt;

/// Solubility verdict for a solvent, derived from its RED value.
///
/// The bands are fixed domain thresholds with the upper bound of each band
/// inclusive: RED of exactly 1.0 is still `Soluble`, exactly 1.5 still
/// `PartiallySoluble`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Soluble,
    #[serde(rename = "Partially Soluble")]
    PartiallySoluble,
    Insoluble,
}

impl Classification {
    #[inline]
    pub fn from_red(red: f64) -> Self {
        if red <= 1.0 {
            Classification::Soluble
        } else if red <= 1.5 {
            Classification::PartiallySoluble
        } else {
            Classification::Insoluble
        }
    }

    /// Human-readable label, as shown in result tables.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Soluble => "Soluble",
            Classification::PartiallySoluble => "Partially Soluble",
            Classification::Insoluble => "Insoluble",
        }
    }

    /// Color tag handed to the external renderer.
    pub fn color_tag(&self) -> &'static str {
        match self {
            Classification::Soluble => "green",
            Classification::PartiallySoluble => "orange",
            Classification::Insoluble => "red",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-solvent evaluation record.
///
/// `d`, `p`, `h` are copied from the solvent so the record is
/// self-contained for plotting. `ra` and `red` are rounded to two decimals
/// and the temperature-corrected solubility to four, matching the precision
/// the reference tables are quoted at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolventEvaluation {
    pub d: f64,
    pub p: f64,
    pub h: f64,
    /// Hansen distance Ra between solute and solvent.
    pub ra: f64,
    /// Relative energy difference Ra / Ro.
    pub red: f64,
    pub classification: Classification,
    /// Inverse-RED solubility with the linear temperature correction applied.
    pub temp_corrected_solubility: f64,
}
