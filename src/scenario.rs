//! Synthetic single-instant scenarios: true target positions plus noisy
//! detections and uniform clutter. Also reads and writes scenario JSON files
//! of the form `{"targets": [[x, y], ...], "measurements": [[x, y], ...]}`.

use crate::error::{AssocError, Result};
use crate::position::Position;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of true targets, each producing one detection.
    pub n_objects: usize,
    /// Number of clutter detections.
    pub n_clutter: usize,
    /// Std-dev of the Gaussian noise added to each detection coordinate.
    pub noise_std: f64,
    /// Side of the square area; coordinates are integers in `0..area_size`.
    pub area_size: u32,
    /// Fixed seed for reproducible scenarios.
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            n_objects: 3,
            n_clutter: 5,
            noise_std: 1.0,
            area_size: 100,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub targets: Vec<Position<f64>>,
    /// Detections of `targets` in the same order, followed by clutter.
    pub measurements: Vec<Position<f64>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ScenarioJson {
    targets: Vec<Vec<f64>>,
    measurements: Vec<Vec<f64>>,
}

/// Generate a scenario.
///
/// Target `i` is detected by measurement `i`; measurements
/// `n_objects..n_objects + n_clutter` are clutter.
pub fn generate(config: &ScenarioConfig) -> Result<Scenario> {
    if config.area_size == 0 {
        return Err(AssocError::InvalidConfig(
            "area_size must be greater than 0".to_string(),
        ));
    }
    let noise = Normal::new(0.0, config.noise_std).map_err(|e| {
        AssocError::InvalidConfig(format!(
            "noise_std {}: {}",
            config.noise_std, e
        ))
    })?;
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let targets: Vec<Position<f64>> = (0..config.n_objects)
        .map(|_| grid_point(&mut rng, config.area_size))
        .collect();

    let mut measurements =
        Vec::with_capacity(config.n_objects + config.n_clutter);
    for target in targets.iter() {
        measurements.push(Position::new(
            target.x() + noise.sample(&mut rng),
            target.y() + noise.sample(&mut rng),
        ));
    }
    for _ in 0..config.n_clutter {
        measurements.push(grid_point(&mut rng, config.area_size));
    }

    debug!(
        "generated scenario: {} targets, {} measurements ({} clutter)",
        targets.len(),
        measurements.len(),
        config.n_clutter
    );
    Ok(Scenario {
        targets,
        measurements,
    })
}

fn grid_point<R: Rng>(rng: &mut R, area_size: u32) -> Position<f64> {
    let x = rng.gen_range(0..area_size);
    let y = rng.gen_range(0..area_size);
    Position::new(x as f64, y as f64)
}

fn parse_rows(kind: &str, rows: &[Vec<f64>]) -> Result<Vec<Position<f64>>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            Position::try_from(row.as_slice()).map_err(|e| match e {
                AssocError::InvalidInput(msg) => {
                    AssocError::InvalidInput(format!("{} {}: {}", kind, i, msg))
                }
                other => other,
            })
        })
        .collect()
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: ScenarioJson = serde_json::from_str(json)?;
        Ok(Self {
            targets: parse_rows("target", &raw.targets)?,
            measurements: parse_rows("measurement", &raw.measurements)?,
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let raw = ScenarioJson {
            targets: self
                .targets
                .iter()
                .map(|p| p.to_array().to_vec())
                .collect(),
            measurements: self
                .measurements
                .iter()
                .map(|p| p.to_array().to_vec())
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&raw)?)
    }
}
