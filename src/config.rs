use crate::cost_matrix::{build_cost_matrix, CostMatrix, DEFAULT_MAX_COST};
use crate::error::{AssocError, Result};
use crate::nearest_neighbor::{associate, Association};
use crate::position::Position;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default gate for nearest-neighbour association.
pub const DEFAULT_GATE_THRESHOLD: f64 = 10.0;

/*-----------------------------------------------------------------------------
AssociationConfig
-----------------------------------------------------------------------------*/

/// Scalars shared by both association components.
///
/// Missing fields in JSON fall back to the defaults, e.g. `{"max_cost": 250}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociationConfig {
    /// Nearest-neighbour gate; a match needs `distance < gate_threshold`.
    pub gate_threshold: f64,
    /// Sentinel cost written into padded cost-matrix cells.
    pub max_cost: f64,
}

impl Default for AssociationConfig {
    fn default() -> Self {
        Self {
            gate_threshold: DEFAULT_GATE_THRESHOLD,
            max_cost: DEFAULT_MAX_COST,
        }
    }
}

impl AssociationConfig {
    pub fn new(gate_threshold: f64, max_cost: f64) -> Result<Self> {
        let config = Self {
            gate_threshold,
            max_cost,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gate_threshold.is_finite() || self.gate_threshold <= 0.0 {
            return Err(AssocError::InvalidConfig(format!(
                "gate_threshold must be finite and positive, got {}",
                self.gate_threshold
            )));
        }
        if !self.max_cost.is_finite() || self.max_cost < 0.0 {
            return Err(AssocError::InvalidConfig(format!(
                "max_cost must be finite and non-negative, got {}",
                self.max_cost
            )));
        }
        Ok(())
    }

    pub fn associate(
        &self,
        targets: &[Position<f64>],
        measurements: &[Position<f64>],
    ) -> Result<Association> {
        associate(targets, measurements, self.gate_threshold)
    }

    /// Same as [`build_cost_matrix`], but logs a warning when `max_cost`
    /// does not exceed every real distance.
    pub fn build_cost_matrix(
        &self,
        targets: &[Position<f64>],
        measurements: &[Position<f64>],
    ) -> Result<CostMatrix<f64>> {
        let cost_matrix =
            build_cost_matrix(targets, measurements, self.max_cost)?;
        if !cost_matrix.dominates_real_costs() {
            warn!(
                "max_cost {} does not exceed the largest real distance {:?}; \
                 padded cells may be preferred over real matches",
                self.max_cost,
                cost_matrix.max_real_cost()
            );
        }
        Ok(cost_matrix)
    }
}
