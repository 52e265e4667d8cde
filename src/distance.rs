//! Pairwise distance table shared by the matcher and the cost-matrix builder.

use crate::error::{AssocError, Result};
use crate::position::Position;
use nalgebra::DMatrix;
use num::Float;
use std::fmt::Debug;

/// Compute the `targets.len() x measurements.len()` table of Euclidean
/// distances. Row `i` is target `i`, column `j` is measurement `j`.
///
/// Either side may be empty, in which case the table has zero rows or
/// zero columns.
pub fn distance_table<T>(
    targets: &[Position<T>],
    measurements: &[Position<T>],
) -> DMatrix<T>
where
    T: Debug + Float + 'static,
{
    DMatrix::from_fn(targets.len(), measurements.len(), |i, j| {
        targets[i].distance(&measurements[j])
    })
}

/// Fail fast on the first non-finite coordinate in `positions`.
///
/// `kind` names the set in the error message ("target", "measurement").
pub fn validate_positions<T>(
    kind: &str,
    positions: &[Position<T>],
) -> Result<()>
where
    T: Debug + Float + 'static,
{
    for (i, p) in positions.iter().enumerate() {
        if !p.is_finite() {
            return Err(AssocError::InvalidInput(format!(
                "{} {}: non-finite coordinate ({:?}, {:?})",
                kind,
                i,
                p.x(),
                p.y()
            )));
        }
    }
    Ok(())
}
