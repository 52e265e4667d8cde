use crate::error::{AssocError, Result};
use nalgebra::Matrix1x2;
use num::Float;
use std::fmt::Debug;

/* -----------------------------------------------------------------------------
 * Position struct
 * -------------------------------------------------------------------------- */

/// A planar point `(x, y)`. Targets and measurements are both plain positions;
/// their identity is their index in the slice they come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position<T>
where
    T: Debug + Float + 'static,
{
    xy: Matrix1x2<T>,
}

impl<T> Position<T>
where
    T: Debug + Float + 'static,
{
    pub fn new(x: T, y: T) -> Self {
        Self {
            xy: Matrix1x2::new(x, y),
        }
    }

    /// Like [`Position::new`], but rejects NaN and infinite coordinates.
    pub fn try_new(x: T, y: T) -> Result<Self> {
        let position = Self::new(x, y);
        if !position.is_finite() {
            return Err(AssocError::InvalidInput(format!(
                "non-finite coordinate ({:?}, {:?})",
                x, y
            )));
        }
        Ok(position)
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.xy[(0, 0)]
    }

    #[inline(always)]
    pub fn set_x(&mut self, x: T) {
        self.xy[(0, 0)] = x;
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.xy[(0, 1)]
    }

    #[inline(always)]
    pub fn set_y(&mut self, y: T) {
        self.xy[(0, 1)] = y;
    }

    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Euclidean distance `sqrt(dx^2 + dy^2)`, computed with `hypot` so
    /// large coordinates do not overflow in the squares.
    ///
    /// Every distance in the crate goes through this method, so the matcher
    /// and the cost matrix always agree bit for bit on the same pair.
    #[inline]
    pub fn distance(&self, other: &Position<T>) -> T {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx.hypot(dy)
    }

    pub fn to_array(&self) -> [T; 2] {
        [self.x(), self.y()]
    }
}

impl<T> From<[T; 2]> for Position<T>
where
    T: Debug + Float + 'static,
{
    fn from(xy: [T; 2]) -> Self {
        Self::new(xy[0], xy[1])
    }
}

impl<T> TryFrom<&[T]> for Position<T>
where
    T: Debug + Float + 'static,
{
    type Error = AssocError;

    fn try_from(xy: &[T]) -> Result<Self> {
        match *xy {
            [x, y] => Self::try_new(x, y),
            _ => Err(AssocError::InvalidInput(format!(
                "expected 2 coordinates, got {}",
                xy.len()
            ))),
        }
    }
}
