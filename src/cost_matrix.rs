//! Square cost matrices for one-to-one assignment solvers.
//!
//! The real `targets x measurements` distances are padded with a sentinel
//! cost (`max_cost`) until the matrix is square. A padded cell stands for
//! "target left unassigned" (extra column) or "spurious measurement" (extra
//! row). `max_cost` has to exceed every plausible real distance for a solver
//! to prefer real pairs; this module does not check that.

use crate::distance::{distance_table, validate_positions};
use crate::error::Result;
use crate::position::Position;
use log::debug;
use nalgebra::DMatrix;
use num::Float;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Sentinel cost used when the caller does not pick one.
pub const DEFAULT_MAX_COST: f64 = 1000.0;

/* -----------------------------------------------------------------------------
 * Padding
 * -------------------------------------------------------------------------- */

/// How a `rows x cols` rectangle is squared. Exactly one kind applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Already square.
    Square,
    /// More targets than measurements: this many sentinel columns are appended.
    Columns(usize),
    /// More measurements than targets: this many sentinel rows are appended.
    Rows(usize),
}

impl Padding {
    pub fn for_shape(n_targets: usize, n_measurements: usize) -> Self {
        match n_targets.cmp(&n_measurements) {
            Ordering::Greater => Padding::Columns(n_targets - n_measurements),
            Ordering::Less => Padding::Rows(n_measurements - n_targets),
            Ordering::Equal => Padding::Square,
        }
    }
}

/* -----------------------------------------------------------------------------
 * CostMatrix
 * -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix<T>
where
    T: Debug + Float + 'static,
{
    matrix: DMatrix<T>,
    n_targets: usize,
    n_measurements: usize,
    max_cost: T,
    padding: Padding,
}

impl<T> CostMatrix<T>
where
    T: Debug + Float + 'static,
{
    /// Square a precomputed `targets x measurements` distance table.
    pub fn from_distances(distances: DMatrix<T>, max_cost: T) -> Self {
        let (n_targets, n_measurements) = distances.shape();
        let padding = Padding::for_shape(n_targets, n_measurements);

        let matrix = match padding {
            Padding::Square => distances,
            Padding::Columns(extra) => {
                distances.resize(n_targets, n_measurements + extra, max_cost)
            }
            Padding::Rows(extra) => {
                distances.resize(n_targets + extra, n_measurements, max_cost)
            }
        };
        debug_assert!(matrix.is_square(), "cost matrix must be square");

        Self {
            matrix,
            n_targets,
            n_measurements,
            max_cost,
            padding,
        }
    }

    /// Side length of the square matrix, `max(n_targets, n_measurements)`.
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn n_targets(&self) -> usize {
        self.n_targets
    }

    pub fn n_measurements(&self) -> usize {
        self.n_measurements
    }

    pub fn max_cost(&self) -> T {
        self.max_cost
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// True when `(row, col)` lies outside the real distance rectangle.
    pub fn is_padding(&self, row: usize, col: usize) -> bool {
        row >= self.n_targets || col >= self.n_measurements
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.matrix.get((row, col)).copied()
    }

    /// Largest real (non-padded) cost, `None` when the rectangle is empty.
    pub fn max_real_cost(&self) -> Option<T> {
        if self.n_targets == 0 || self.n_measurements == 0 {
            return None;
        }
        self.matrix
            .view((0, 0), (self.n_targets, self.n_measurements))
            .iter()
            .copied()
            .reduce(T::max)
    }

    /// Whether `max_cost` is strictly greater than every real cost.
    pub fn dominates_real_costs(&self) -> bool {
        self.max_real_cost().map_or(true, |real| self.max_cost > real)
    }

    pub fn as_matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    pub fn into_inner(self) -> DMatrix<T> {
        self.matrix
    }

    /// Row-major copy, the layout dense solvers such as lapjv take.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

/// Build the square cost matrix for `targets` (rows) and `measurements`
/// (columns).
///
/// Cell `(i, j)` with `i < targets.len()` and `j < measurements.len()` is the
/// Euclidean distance between target `i` and measurement `j`. All other cells
/// are exactly `max_cost`.
///
/// # Errors
/// [`AssocError::InvalidInput`](crate::AssocError::InvalidInput) if any
/// coordinate is NaN or infinite.
pub fn build_cost_matrix<T>(
    targets: &[Position<T>],
    measurements: &[Position<T>],
    max_cost: T,
) -> Result<CostMatrix<T>>
where
    T: Debug + Float + 'static,
{
    validate_positions("target", targets)?;
    validate_positions("measurement", measurements)?;

    let distances = distance_table(targets, measurements);
    let cost_matrix = CostMatrix::from_distances(distances, max_cost);

    debug!(
        "cost matrix: {} targets x {} measurements -> {}x{} ({:?})",
        cost_matrix.n_targets(),
        cost_matrix.n_measurements(),
        cost_matrix.size(),
        cost_matrix.size(),
        cost_matrix.padding()
    );
    Ok(cost_matrix)
}
