//! Entities of the tank model and the roles their quantities play.

use core::fmt;

use qf_core::{QuantitySpace, bounded_magnitude_space, derivative_space, magnitude_space};

/// A physical entity of the tank model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entity {
    Inflow,
    Volume,
    Outflow,
}

impl Entity {
    pub const ALL: [Entity; 3] = [Entity::Inflow, Entity::Volume, Entity::Outflow];

    pub fn name(self) -> &'static str {
        match self {
            Entity::Inflow => "inflow",
            Entity::Volume => "volume",
            Entity::Outflow => "outflow",
        }
    }

    /// Position of the entity inside a state.
    pub(crate) fn slot(self) -> usize {
        self as usize
    }

    /// Space of this entity's quantity in `role`.
    ///
    /// Inflow has no maximum; volume and outflow saturate at one.
    pub fn space(self, role: Role) -> &'static QuantitySpace {
        match (self, role) {
            (_, Role::Derivative) => derivative_space(),
            (Entity::Inflow, Role::Magnitude) => magnitude_space(),
            (Entity::Volume | Entity::Outflow, Role::Magnitude) => bounded_magnitude_space(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role of a quantity: the entity's amount or its rate of change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Magnitude,
    Derivative,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Magnitude, Role::Derivative];

    pub fn name(self) -> &'static str {
        match self {
            Role::Magnitude => "magnitude",
            Role::Derivative => "derivative",
        }
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
