//! Value-type qualitative quantities.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::{QfError, QfResult};
use crate::qspace::QuantitySpace;

/// One landmark step along a quantity space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Up,
    Down,
}

impl Step {
    /// Signed delta: +1 for `Up`, -1 for `Down`.
    pub fn delta(self) -> i32 {
        match self {
            Step::Up => 1,
            Step::Down => -1,
        }
    }
}

/// A position in a quantity space.
///
/// Copied by value on every state change. Equality and hashing look only at the
/// resolved landmark value, never at which space the quantity points into.
#[derive(Clone, Copy)]
pub struct Quantity {
    space: &'static QuantitySpace,
    index: usize,
}

impl Quantity {
    /// Quantity at `index` in `space`.
    pub fn new(space: &'static QuantitySpace, index: usize) -> QfResult<Self> {
        if index >= space.len() {
            return Err(QfError::IndexOob {
                what: "landmark index",
                index,
                len: space.len(),
            });
        }
        Ok(Self { space, index })
    }

    /// Quantity at the landmark called `name`.
    pub fn at_landmark(space: &'static QuantitySpace, name: &str) -> QfResult<Self> {
        let index = space.index_of(name)?;
        Ok(Self { space, index })
    }

    /// Quantity at the minimum landmark of `space`.
    pub fn min(space: &'static QuantitySpace) -> Self {
        Self { space, index: 0 }
    }

    /// Step up one landmark; no-op at the maximum.
    pub fn increase(&mut self) {
        if self.index < self.space.max_index() {
            self.index += 1;
        }
    }

    /// Step down one landmark; no-op at the minimum.
    pub fn decrease(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    pub fn step(&mut self, step: Step) {
        match step {
            Step::Up => self.increase(),
            Step::Down => self.decrease(),
        }
    }

    /// Copy of `self` moved by `step`.
    pub fn stepped(mut self, step: Step) -> Self {
        self.step(step);
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn space(&self) -> &'static QuantitySpace {
        self.space
    }

    /// Signed value of the current landmark.
    pub fn value(&self) -> i32 {
        self.space.landmarks()[self.index].value
    }

    /// Name of the current landmark.
    pub fn name(&self) -> &'static str {
        &self.space.landmarks()[self.index].name
    }

    pub fn is_stationary(&self) -> bool {
        self.space.landmarks()[self.index].stationary
    }

    pub fn is_min(&self) -> bool {
        self.index == 0
    }

    pub fn is_max(&self) -> bool {
        self.index == self.space.max_index()
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Quantity {}

impl Hash for Quantity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name(), self.space.name())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qspace::{bounded_magnitude_space, derivative_space, magnitude_space};

    #[test]
    fn increase_saturates_at_maximum() {
        let mut q = Quantity::at_landmark(derivative_space(), "positive").unwrap();
        q.increase();
        assert_eq!(q.name(), "positive");
        assert!(q.is_max());
    }

    #[test]
    fn decrease_saturates_at_minimum() {
        let mut q = Quantity::min(bounded_magnitude_space());
        q.decrease();
        assert_eq!(q.index(), 0);
        assert_eq!(q.name(), "zero");
    }

    #[test]
    fn value_name_and_stationary() {
        let mut q = Quantity::min(bounded_magnitude_space());
        assert!(q.is_stationary());
        q.increase();
        assert_eq!(q.value(), 1);
        assert_eq!(q.name(), "positive");
        assert!(!q.is_stationary());
        q.increase();
        assert_eq!(q.name(), "maximum");
        assert!(q.is_stationary());
    }

    #[test]
    fn new_checks_bounds() {
        assert!(Quantity::new(magnitude_space(), 1).is_ok());
        let err = Quantity::new(magnitude_space(), 2).unwrap_err();
        assert_eq!(
            err,
            QfError::IndexOob {
                what: "landmark index",
                index: 2,
                len: 2
            }
        );
    }

    #[test]
    fn equality_ignores_space_identity() {
        // zero of the magnitude space and zero of the derivative space share value 0
        let a = Quantity::min(magnitude_space());
        let b = Quantity::at_landmark(derivative_space(), "zero").unwrap();
        assert_eq!(a, b);

        let c = Quantity::at_landmark(derivative_space(), "negative").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn stepped_leaves_original_untouched() {
        let q = Quantity::min(bounded_magnitude_space());
        let up = q.stepped(Step::Up);
        assert_eq!(q.index(), 0);
        assert_eq!(up.index(), 1);
        assert_eq!(Step::Down.delta(), -1);
    }
}
