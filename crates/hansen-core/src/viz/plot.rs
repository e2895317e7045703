use crate::core::models::evaluation::SolventEvaluation;
use crate::core::models::hsp::Solute;
use serde::Serialize;
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Mesh resolution of the solubility sphere: 20 azimuthal by 10 polar
/// samples, endpoints included on both sweeps.
pub const SPHERE_U_SAMPLES: usize = 20;
pub const SPHERE_V_SAMPLES: usize = 10;

const SOLUTE_COLOR: &str = "blue";
const SPHERE_OPACITY: f64 = 0.2;

/// A labeled marker in HSP space. The axes map directly to the renderer's
/// x/y/z: dispersion, polar, hydrogen bonding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    pub name: String,
    pub d: f64,
    pub p: f64,
    pub h: f64,
    pub color: &'static str,
}

/// Translucent sphere surface centered on the solute, radius Ro.
///
/// `x[i][j]` pairs with `y[i][j]`/`z[i][j]`: index `i` sweeps the azimuthal
/// angle over `[0, 2π]`, index `j` the polar angle over `[0, π]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SphereSurface {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
    pub color: &'static str,
    pub opacity: f64,
}

/// Axis captions carried along so the renderer needs no HSP knowledge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub x: &'static str,
    pub y: &'static str,
    pub z: &'static str,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: "δD (Dispersion)",
            y: "δP (Polar)",
            z: "δH (Hydrogen Bonding)",
        }
    }
}

/// Everything an external 3D renderer needs: one classification-colored
/// point per evaluated solvent, the solute marker, and its solubility
/// sphere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotData {
    pub solvents: Vec<PlotPoint>,
    pub solute: PlotPoint,
    pub sphere: SphereSurface,
    pub axes: AxisLabels,
}

/// Builds the plot description from per-solvent evaluation records.
///
/// Records are keyed by solvent name, so points come out in name order.
pub fn build_plot_data(
    solute: &Solute,
    results: &BTreeMap<String, SolventEvaluation>,
) -> PlotData {
    let solvents = results
        .iter()
        .map(|(name, record)| PlotPoint {
            name: name.clone(),
            d: record.d,
            p: record.p,
            h: record.h,
            color: record.classification.color_tag(),
        })
        .collect();

    PlotData {
        solvents,
        solute: PlotPoint {
            name: solute.label().to_string(),
            d: solute.hsp.d,
            p: solute.hsp.p,
            h: solute.hsp.h,
            color: SOLUTE_COLOR,
        },
        sphere: sphere_surface(solute),
        axes: AxisLabels::default(),
    }
}

/// Standard spherical-to-Cartesian sweep of the solubility sphere around the
/// solute's position.
fn sphere_surface(solute: &Solute) -> SphereSurface {
    let center = solute.hsp;
    let ro = solute.ro;

    let mut x = vec![vec![0.0; SPHERE_V_SAMPLES]; SPHERE_U_SAMPLES];
    let mut y = vec![vec![0.0; SPHERE_V_SAMPLES]; SPHERE_U_SAMPLES];
    let mut z = vec![vec![0.0; SPHERE_V_SAMPLES]; SPHERE_U_SAMPLES];

    for i in 0..SPHERE_U_SAMPLES {
        let u = 2.0 * PI * i as f64 / (SPHERE_U_SAMPLES - 1) as f64;
        for j in 0..SPHERE_V_SAMPLES {
            let v = PI * j as f64 / (SPHERE_V_SAMPLES - 1) as f64;
            x[i][j] = ro * u.cos() * v.sin() + center.d;
            y[i][j] = ro * u.sin() * v.sin() + center.p;
            z[i][j] = ro * v.cos() + center.h;
        }
    }

    SphereSurface {
        x,
        y,
        z,
        color: SOLUTE_COLOR,
        opacity: SPHERE_OPACITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::evaluation::Classification;
    use crate::core::models::hsp::HspVector;

    fn record(d: f64, p: f64, h: f64, classification: Classification) -> SolventEvaluation {
        SolventEvaluation {
            d,
            p,
            h,
            ra: 1.0,
            red: 0.5,
            classification,
            temp_corrected_solubility: 2.0,
        }
    }

    #[test]
    fn one_point_per_evaluated_solvent_colored_by_classification() {
        let solute = Solute::new(HspVector::new(18.0, 5.0, 7.0), 4.0);
        let mut results = BTreeMap::new();
        results.insert(
            "Acetone".to_string(),
            record(15.5, 10.4, 7.0, Classification::Soluble),
        );
        results.insert(
            "Hexane".to_string(),
            record(14.9, 0.0, 0.0, Classification::Insoluble),
        );

        let plot = build_plot_data(&solute, &results);

        assert_eq!(plot.solvents.len(), 2);
        assert_eq!(plot.solvents[0].name, "Acetone");
        assert_eq!(plot.solvents[0].color, "green");
        assert_eq!(plot.solvents[1].color, "red");
    }

    #[test]
    fn solute_point_sits_at_its_hsp_coordinates() {
        let solute = Solute::named("Curcumin", HspVector::new(18.2, 8.6, 11.5), 5.5);
        let plot = build_plot_data(&solute, &BTreeMap::new());

        assert_eq!(plot.solute.name, "Curcumin");
        assert_eq!(plot.solute.d, 18.2);
        assert_eq!(plot.solute.p, 8.6);
        assert_eq!(plot.solute.h, 11.5);
        assert_eq!(plot.solute.color, "blue");
    }

    #[test]
    fn sphere_mesh_has_20_by_10_resolution() {
        let solute = Solute::new(HspVector::new(0.0, 0.0, 0.0), 3.0);
        let plot = build_plot_data(&solute, &BTreeMap::new());

        assert_eq!(plot.sphere.x.len(), SPHERE_U_SAMPLES);
        assert_eq!(plot.sphere.x[0].len(), SPHERE_V_SAMPLES);
        assert_eq!(plot.sphere.y.len(), SPHERE_U_SAMPLES);
        assert_eq!(plot.sphere.z.len(), SPHERE_U_SAMPLES);
    }

    #[test]
    fn sphere_poles_sit_at_radius_along_the_h_axis() {
        let solute = Solute::new(HspVector::new(18.0, 5.0, 7.0), 4.0);
        let plot = build_plot_data(&solute, &BTreeMap::new());

        // v = 0 is the north pole: (d, p, h + ro).
        assert!((plot.sphere.x[0][0] - 18.0).abs() < 1e-12);
        assert!((plot.sphere.y[0][0] - 5.0).abs() < 1e-12);
        assert!((plot.sphere.z[0][0] - 11.0).abs() < 1e-12);

        // v = π is the south pole: (d, p, h - ro).
        let last = SPHERE_V_SAMPLES - 1;
        assert!((plot.sphere.z[0][last] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn every_sphere_vertex_lies_on_the_sphere() {
        let solute = Solute::new(HspVector::new(18.0, 5.0, 7.0), 4.0);
        let plot = build_plot_data(&solute, &BTreeMap::new());

        for i in 0..SPHERE_U_SAMPLES {
            for j in 0..SPHERE_V_SAMPLES {
                let dx = plot.sphere.x[i][j] - 18.0;
                let dy = plot.sphere.y[i][j] - 5.0;
                let dz = plot.sphere.z[i][j] - 7.0;
                let r = (dx * dx + dy * dy + dz * dz).sqrt();
                assert!((r - 4.0).abs() < 1e-9);
            }
        }
    }
}
