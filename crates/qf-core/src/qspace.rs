//! Quantity spaces: finite, totally ordered domains of qualitative landmarks.
//!
//! A space is built once and never mutated. Quantities hold a `&'static`
//! reference to their space, so the standard spaces live in process-wide
//! statics and custom spaces are promoted with [`QuantitySpace::into_static`].

use std::sync::LazyLock;

use crate::error::{QfError, QfResult};

/// A named, ordered qualitative value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landmark {
    pub name: String,
    pub value: i32,
    /// Derivative dynamics pause or reset when a quantity sits here.
    pub stationary: bool,
}

/// Ordered landmarks; index 0 is the minimum, `len() - 1` the maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantitySpace {
    name: String,
    landmarks: Vec<Landmark>,
}

impl QuantitySpace {
    /// Build a space from parallel landmark names, values and stationary flags.
    ///
    /// Fails if the three sequences differ in length, hold fewer than two
    /// landmarks, or if the values are not strictly increasing.
    pub fn new(
        name: impl Into<String>,
        names: &[&str],
        values: &[i32],
        stationary: &[bool],
    ) -> QfResult<Self> {
        let name = name.into();
        if names.len() != values.len() || names.len() != stationary.len() {
            return Err(QfError::MalformedSpace {
                space: name,
                what: "landmark, value and stationary counts differ",
            });
        }
        if names.len() < 2 {
            return Err(QfError::MalformedSpace {
                space: name,
                what: "fewer than two landmarks",
            });
        }
        if values.windows(2).any(|w| w[0] >= w[1]) {
            return Err(QfError::MalformedSpace {
                space: name,
                what: "values are not strictly increasing",
            });
        }

        let landmarks = names
            .iter()
            .zip(values)
            .zip(stationary)
            .map(|((n, &value), &stationary)| Landmark {
                name: (*n).to_string(),
                value,
                stationary,
            })
            .collect();

        Ok(Self { name, landmarks })
    }

    /// Leak the space so quantities can reference it for the rest of the run.
    pub fn into_static(self) -> &'static QuantitySpace {
        Box::leak(Box::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Number of landmarks (always >= 2).
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Index of the maximum landmark.
    pub fn max_index(&self) -> usize {
        self.landmarks.len() - 1
    }

    /// Landmark at `index`, if in range.
    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Index of the landmark called `name`.
    pub fn index_of(&self, name: &str) -> QfResult<usize> {
        self.landmarks
            .iter()
            .position(|l| l.name == name)
            .ok_or_else(|| QfError::UnknownLandmark {
                space: self.name.clone(),
                landmark: name.to_string(),
            })
    }
}

static DERIVATIVE: LazyLock<QuantitySpace> = LazyLock::new(|| {
    QuantitySpace::new(
        "derivative",
        &["negative", "zero", "positive"],
        &[-1, 0, 1],
        &[false, true, false],
    )
    .expect("derivative space is well-formed")
});

static MAGNITUDE: LazyLock<QuantitySpace> = LazyLock::new(|| {
    QuantitySpace::new("magnitude", &["zero", "positive"], &[0, 1], &[true, false])
        .expect("magnitude space is well-formed")
});

static BOUNDED_MAGNITUDE: LazyLock<QuantitySpace> = LazyLock::new(|| {
    QuantitySpace::new(
        "bounded_magnitude",
        &["zero", "positive", "maximum"],
        &[0, 1, 2],
        &[true, false, true],
    )
    .expect("bounded magnitude space is well-formed")
});

/// negative / zero / positive; zero is stationary.
pub fn derivative_space() -> &'static QuantitySpace {
    &DERIVATIVE
}

/// zero / positive; zero is stationary.
pub fn magnitude_space() -> &'static QuantitySpace {
    &MAGNITUDE
}

/// zero / positive / maximum; zero and maximum are stationary.
pub fn bounded_magnitude_space() -> &'static QuantitySpace {
    &BOUNDED_MAGNITUDE
}
