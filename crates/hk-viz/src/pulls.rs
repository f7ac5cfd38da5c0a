//! Pull-plot artifact (numbers-first).
//!
//! The artifact mirrors the two stacked panels of the classic pull plot: a
//! main panel with the scaled model curve and the observed counts with
//! Poisson-like errors, and a pull panel with the normalized residuals and
//! the ±kσ bands a renderer is expected to shade.

use std::fs::File;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use hk_core::Result;
use hk_hist::Histogram;
use serde::Serialize;

/// Pull-plot artifact for a one-dimensional histogram.
#[derive(Debug, Clone, Serialize)]
pub struct PullArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Tool provenance.
    pub meta: PullMeta,
    /// Model curve + observed counts panel.
    pub main_panel: MainPanel,
    /// Normalized-residuals panel.
    pub pull_panel: PullPanel,
}

/// Provenance block carried by every artifact.
#[derive(Debug, Clone, Serialize)]
pub struct PullMeta {
    /// Producing tool name.
    pub tool: String,
    /// Producing tool version.
    pub tool_version: String,
    /// Creation time, unix milliseconds.
    pub created_unix_ms: u128,
}

/// The value/model panel of the pull plot.
#[derive(Debug, Clone, Serialize)]
pub struct MainPanel {
    /// Axis name, if the histogram axis carries one (used as the y label).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_name: Option<String>,
    /// Bin centers.
    pub centers: Vec<f64>,
    /// Model curve scaled to the histogram: `model(center) * sum * width`.
    pub model_y: Vec<f64>,
    /// Observed bin contents.
    pub data_y: Vec<f64>,
    /// Poisson-like errors, `sqrt(count)`; NaN where the count is unusable.
    pub data_yerr: Vec<f64>,
}

/// The residuals panel of the pull plot.
#[derive(Debug, Clone, Serialize)]
pub struct PullPanel {
    /// Bin centers.
    pub centers: Vec<f64>,
    /// Bin widths (bar widths for the renderer).
    pub widths: Vec<f64>,
    /// Normalized residuals, `(data - model) / yerr`.
    pub pulls: Vec<f64>,
    /// Bands ±1σ..±kσ, `k` capped at the largest finite pull.
    pub sigma_bands: Vec<SigmaBand>,
}

/// One shaded ±kσ band.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SigmaBand {
    /// Band order (1 = ±1σ).
    pub k: u32,
    /// Lower edge, `-(k as f64)`.
    pub lo: f64,
    /// Upper edge, `k as f64`.
    pub hi: f64,
}

fn now_unix_ms() -> Result<u128> {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| hk_core::Error::Computation(format!("system time error: {}", e)))?;
    Ok(d.as_millis())
}

/// Build a pull-plot artifact from a 1D histogram and a model density.
///
/// `model` is evaluated at the bin centers and scaled by
/// `hist.sum() * width` so a normalized density lines up with raw counts.
/// Errors are `sqrt(count)` with the NaN fallback for non-positive counts;
/// pulls divide straight through, so empty bins produce non-finite pulls
/// (serialized as `null`).
///
/// Requires a one-dimensional histogram over a continuous axis; anything
/// else fails with a validation error; there is no degraded half-result.
pub fn pull_artifact<F>(hist: &Histogram, model: F) -> Result<PullArtifact>
where
    F: Fn(f64) -> f64,
{
    if hist.num_dim() != 1 {
        return Err(hk_core::Error::Validation(format!(
            "pull artifact requires a 1D histogram, got {} dimensions",
            hist.num_dim()
        )));
    }
    let axis = &hist.axes()[0];
    let (Some(centers), Some(widths)) = (axis.centers(), axis.widths()) else {
        return Err(hk_core::Error::Validation(
            "pull artifact requires a continuous axis, not categories".to_string(),
        ));
    };

    let total = hist.sum();
    let data_y: Vec<f64> = hist.view().to_vec();

    let model_y: Vec<f64> = centers
        .iter()
        .zip(&widths)
        .map(|(&c, &w)| model(c) * total * w)
        .collect();

    let data_yerr: Vec<f64> = data_y
        .iter()
        .map(|&y| if y.is_finite() && y > 0.0 { y.sqrt() } else { f64::NAN })
        .collect();

    let pulls: Vec<f64> = data_y
        .iter()
        .zip(&model_y)
        .zip(&data_yerr)
        .map(|((&y, &m), &e)| (y - m) / e)
        .collect();

    let k_max = pulls
        .iter()
        .filter(|p| p.is_finite())
        .fold(0.0f64, |acc, p| acc.max(p.abs()))
        .floor() as u32;
    let sigma_bands: Vec<SigmaBand> = (1..=k_max)
        .map(|k| SigmaBand { k, lo: -(k as f64), hi: k as f64 })
        .collect();

    Ok(PullArtifact {
        schema_version: "histkit_pulls_v0".to_string(),
        meta: PullMeta {
            tool: "histkit".to_string(),
            tool_version: hk_core::VERSION.to_string(),
            created_unix_ms: now_unix_ms()?,
        },
        main_panel: MainPanel {
            axis_name: axis.name().map(String::from),
            centers: centers.clone(),
            model_y,
            data_y,
            data_yerr,
        },
        pull_panel: PullPanel { centers, widths, pulls, sigma_bands },
    })
}

impl PullArtifact {
    /// Serialize the artifact to pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the artifact as a JSON file.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hk_hist::{Axis, Column, Histogram};

    fn flat_model(_x: f64) -> f64 {
        // normalized over [0, 10)
        0.1
    }

    fn filled_1d() -> Histogram {
        let mut h = Histogram::new(vec![
            Axis::regular(5, 0.0, 10.0).unwrap().with_name("energy"),
        ])
        .unwrap();
        h.fill(
            &[Column::from(vec![1.0, 1.5, 3.0, 5.0, 7.0, 9.0, 9.5, 9.9])],
            None,
        )
        .unwrap();
        h
    }

    #[test]
    fn panel_shapes_and_scaling() {
        let h = filled_1d();
        let artifact = pull_artifact(&h, flat_model).unwrap();

        assert_eq!(artifact.schema_version, "histkit_pulls_v0");
        assert_eq!(artifact.main_panel.axis_name.as_deref(), Some("energy"));
        assert_eq!(artifact.main_panel.centers.len(), 5);
        assert_eq!(artifact.main_panel.model_y.len(), 5);
        assert_eq!(artifact.pull_panel.pulls.len(), 5);

        // flat density * 8 entries * bin width 2 = 1.6 expected per bin
        for &m in &artifact.main_panel.model_y {
            assert!((m - 1.6).abs() < 1e-12);
        }
    }

    #[test]
    fn pulls_follow_the_definition() {
        let h = filled_1d();
        let artifact = pull_artifact(&h, flat_model).unwrap();
        let data = h.view();
        for i in 0..data.len() {
            if data[i] > 0.0 {
                let want = (data[i] - 1.6) / data[i].sqrt();
                assert!((artifact.pull_panel.pulls[i] - want).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn empty_bins_produce_nan_errors() {
        let mut h = Histogram::new(vec![Axis::regular(4, 0.0, 4.0).unwrap()]).unwrap();
        h.fill(&[Column::from(vec![0.5])], None).unwrap();
        let artifact = pull_artifact(&h, |_| 0.25).unwrap();
        assert!(artifact.main_panel.data_yerr[0].is_finite());
        assert!(artifact.main_panel.data_yerr[1].is_nan());
        assert!(artifact.pull_panel.pulls[1].is_nan());
        // still serializes (non-finite floats become null)
        assert!(artifact.to_json_string().is_ok());
    }

    #[test]
    fn rejects_multi_dimensional_and_category_histograms() {
        let h2 = Histogram::new(vec![
            Axis::regular(2, 0.0, 1.0).unwrap(),
            Axis::regular(2, 0.0, 1.0).unwrap(),
        ])
        .unwrap();
        assert!(pull_artifact(&h2, flat_model).is_err());

        let hc = Histogram::new(vec![Axis::str_category(["a", "b"]).unwrap()]).unwrap();
        assert!(pull_artifact(&hc, flat_model).is_err());
    }

    #[test]
    fn sigma_bands_track_the_largest_finite_pull() {
        let mut h = Histogram::new(vec![Axis::regular(2, 0.0, 2.0).unwrap()]).unwrap();
        // 16 entries in bin 0, 0 in bin 1
        h.fill(&[Column::from(vec![0.5; 16])], None).unwrap();
        // model expects 1 per bin -> pull in bin 0 = (16 - 1) / 4 = 3.75
        let artifact = pull_artifact(&h, |_| 1.0 / 16.0).unwrap();
        let ks: Vec<u32> = artifact.pull_panel.sigma_bands.iter().map(|b| b.k).collect();
        assert_eq!(ks, vec![1, 2, 3]);
        assert_eq!(artifact.pull_panel.sigma_bands[0].lo, -1.0);
        assert_eq!(artifact.pull_panel.sigma_bands[2].hi, 3.0);
    }
}
