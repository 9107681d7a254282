use core::fmt;
use core::num::NonZeroU32;

/// Discovery-order position of a state or transition in an envisionment.
///
/// Ids are handed out 0, 1, 2, ... as the search retains states and records
/// transitions, so they double as indices into the graph's vectors. Stored
/// shifted by one so `Option<StateId>` costs nothing extra.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Id of the `index`-th discovered state or transition.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::new(index + 1).expect("discovery index below u32::MAX"))
    }

    /// Discovery position, as printed in `S<n>` labels.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Position in the graph's state or transition vector.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A retained state; `StateId::from_index(0)` is always the seed.
pub type StateId = Id;
pub type EdgeId = Id;
