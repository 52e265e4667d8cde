//! Greedy nearest-neighbour association with a distance gate.
//!
//! Every target independently picks its closest measurement and keeps it when
//! the distance is strictly below the gate. Targets do not compete for
//! measurements, so two targets may end up with the same measurement. Use the
//! [`cost_matrix`](crate::cost_matrix) module with an assignment solver when a
//! one-to-one assignment is needed.

use crate::distance::{distance_table, validate_positions};
use crate::error::Result;
use crate::position::Position;
use log::{debug, trace};
use nalgebra::DMatrix;
use num::Float;
use std::fmt::Debug;

/// Result of [`associate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Association {
    /// `(target_index, measurement_index)` pairs in ascending target order.
    pub matches: Vec<(usize, usize)>,
    /// Targets without a measurement inside the gate, ascending.
    pub unmatched_targets: Vec<usize>,
}

impl Association {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (usize, usize)> {
        self.matches.iter()
    }

    /// Measurement matched to `target`, if any.
    pub fn measurement_for(&self, target: usize) -> Option<usize> {
        self.matches
            .binary_search_by_key(&target, |&(t, _)| t)
            .ok()
            .map(|k| self.matches[k].1)
    }

    /// Measurement indices claimed by more than one target, ascending.
    pub fn shared_measurements(&self) -> Vec<usize> {
        let mut claimed: Vec<usize> =
            self.matches.iter().map(|&(_, m)| m).collect();
        claimed.sort_unstable();

        let mut shared: Vec<usize> = claimed
            .windows(2)
            .filter(|w| w[0] == w[1])
            .map(|w| w[0])
            .collect();
        shared.dedup();
        shared
    }
}

impl<'a> IntoIterator for &'a Association {
    type Item = &'a (usize, usize);
    type IntoIter = std::slice::Iter<'a, (usize, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Associate each target with its nearest measurement.
///
/// For target `i` the measurement `j*` with the smallest distance is chosen;
/// on ties the lowest index wins. The pair `(i, j*)` is kept only when
/// `distance < threshold` (a distance equal to the threshold is rejected).
/// An empty `measurements` slice leaves every target unmatched.
///
/// # Errors
/// [`AssocError::InvalidInput`](crate::AssocError::InvalidInput) if any
/// coordinate is NaN or infinite.
pub fn associate<T>(
    targets: &[Position<T>],
    measurements: &[Position<T>],
    threshold: T,
) -> Result<Association>
where
    T: Debug + Float + 'static,
{
    validate_positions("target", targets)?;
    validate_positions("measurement", measurements)?;

    let table = distance_table(targets, measurements);
    let association = gate_nearest(&table, threshold);

    debug!(
        "nearest-neighbour association: {} targets, {} measurements, \
         {} matched, {} shared measurements",
        targets.len(),
        measurements.len(),
        association.len(),
        association.shared_measurements().len()
    );
    Ok(association)
}

/// Gate the per-row minimum of a precomputed `targets x measurements`
/// distance table. This is the decision step of [`associate`].
pub fn gate_nearest<T>(table: &DMatrix<T>, threshold: T) -> Association
where
    T: Debug + Float + 'static,
{
    let mut association = Association::default();

    for i in 0..table.nrows() {
        match nearest_in_row(table, i) {
            Some((j, dist)) if dist < threshold => {
                trace!(
                    "target {} -> measurement {} (distance {:?})",
                    i,
                    j,
                    dist
                );
                association.matches.push((i, j));
            }
            Some((j, dist)) => {
                trace!(
                    "target {} rejected: nearest measurement {} at {:?} \
                     is outside gate {:?}",
                    i,
                    j,
                    dist,
                    threshold
                );
                association.unmatched_targets.push(i);
            }
            None => {
                association.unmatched_targets.push(i);
            }
        }
    }

    association
}

/// Index and value of the first strict minimum in `row`.
fn nearest_in_row<T>(table: &DMatrix<T>, row: usize) -> Option<(usize, T)>
where
    T: Debug + Float + 'static,
{
    let mut best_dist = T::infinity();
    let mut best_j = None;
    for j in 0..table.ncols() {
        let dist = table[(row, j)];
        if dist < best_dist {
            best_dist = dist;
            best_j = Some(j);
        }
    }
    best_j.map(|j| (j, best_dist))
}
