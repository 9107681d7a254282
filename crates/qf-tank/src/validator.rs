//! Boundary constraints on tank states.

use core::fmt;

use crate::entity::Entity::{Inflow, Outflow, Volume};
use crate::state::SystemState;

/// A physical or qualitative constraint a state breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Volume at maximum but still rising.
    VolumeAboveMaximum,
    /// Volume empty but still falling.
    VolumeBelowEmpty,
    /// Outflow zero but still falling.
    OutflowBelowEmpty,
    /// Volume rising with nothing flowing in.
    VolumeGrowsWithoutInflow,
    /// Inflow closed but still falling.
    InflowBelowClosed,
    /// Volume and outflow trends of opposite sign.
    ProportionalityBroken,
}

impl Violation {
    pub const ALL: [Violation; 6] = [
        Violation::VolumeAboveMaximum,
        Violation::VolumeBelowEmpty,
        Violation::OutflowBelowEmpty,
        Violation::VolumeGrowsWithoutInflow,
        Violation::InflowBelowClosed,
        Violation::ProportionalityBroken,
    ];

    /// Whether `s` breaks this constraint.
    pub fn applies(self, s: &SystemState) -> bool {
        let vd = s.derivative(Volume).value();
        let od = s.derivative(Outflow).value();
        match self {
            Violation::VolumeAboveMaximum => s.magnitude(Volume).is_max() && vd > 0,
            Violation::VolumeBelowEmpty => s.magnitude(Volume).is_min() && vd < 0,
            Violation::OutflowBelowEmpty => s.magnitude(Outflow).is_min() && od < 0,
            Violation::VolumeGrowsWithoutInflow => s.magnitude(Inflow).is_min() && vd > 0,
            Violation::InflowBelowClosed => {
                s.magnitude(Inflow).is_min() && s.derivative(Inflow).value() < 0
            }
            Violation::ProportionalityBroken => vd * od < 0,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Violation::VolumeAboveMaximum => "volume cannot grow past maximum",
            Violation::VolumeBelowEmpty => "volume cannot shrink past empty",
            Violation::OutflowBelowEmpty => "outflow cannot shrink past zero",
            Violation::VolumeGrowsWithoutInflow => "volume cannot grow without inflow",
            Violation::InflowBelowClosed => "inflow cannot decrease below zero",
            Violation::ProportionalityBroken => "volume and outflow trends have opposite signs",
        };
        f.write_str(msg)
    }
}

/// Conjunction of the boundary constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    /// Also reject volume and outflow trending in opposite directions.
    pub strict_proportionality: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            strict_proportionality: true,
        }
    }
}

impl Validator {
    /// Validator without the proportionality constraint.
    pub fn lenient() -> Self {
        Self {
            strict_proportionality: false,
        }
    }

    fn checks(&self) -> impl Iterator<Item = Violation> + '_ {
        Violation::ALL
            .into_iter()
            .filter(|v| self.strict_proportionality || *v != Violation::ProportionalityBroken)
    }

    /// Every constraint `s` breaks, in declaration order.
    pub fn violations(&self, s: &SystemState) -> Vec<Violation> {
        self.checks().filter(|v| v.applies(s)).collect()
    }

    pub fn is_valid(&self, s: &SystemState) -> bool {
        !self.checks().any(|v| v.applies(s))
    }
}
