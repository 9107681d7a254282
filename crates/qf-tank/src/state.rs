//! Qualitative state of the tank.

use core::fmt;

use qf_core::{QfResult, Quantity, Step};

use crate::entity::{Entity, Role};

/// A one-landmark move of a single quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub entity: Entity,
    pub role: Role,
    pub step: Step,
}

impl Delta {
    pub fn up(entity: Entity, role: Role) -> Self {
        Self {
            entity,
            role,
            step: Step::Up,
        }
    }

    pub fn down(entity: Entity, role: Role) -> Self {
        Self {
            entity,
            role,
            step: Step::Down,
        }
    }
}

/// Snapshot of the six quantities, indexed by entity then role.
///
/// A plain value: copying it copies every quantity, and two states are equal
/// when their quantities are pairwise equal by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemState {
    quantities: [[Quantity; 2]; 3],
}

impl SystemState {
    /// Build a state from landmark indices, `[magnitude, derivative]` per entity.
    pub fn from_indices(
        inflow: [usize; 2],
        volume: [usize; 2],
        outflow: [usize; 2],
    ) -> QfResult<Self> {
        let build = |entity: Entity, [m, d]: [usize; 2]| -> QfResult<[Quantity; 2]> {
            Ok([
                Quantity::new(entity.space(Role::Magnitude), m)?,
                Quantity::new(entity.space(Role::Derivative), d)?,
            ])
        };
        Ok(Self {
            quantities: [
                build(Entity::Inflow, inflow)?,
                build(Entity::Volume, volume)?,
                build(Entity::Outflow, outflow)?,
            ],
        })
    }

    /// Build a state from landmark names, `[magnitude, derivative]` per entity.
    pub fn from_landmarks(
        inflow: [&str; 2],
        volume: [&str; 2],
        outflow: [&str; 2],
    ) -> QfResult<Self> {
        let build = |entity: Entity, [m, d]: [&str; 2]| -> QfResult<[Quantity; 2]> {
            Ok([
                Quantity::at_landmark(entity.space(Role::Magnitude), m)?,
                Quantity::at_landmark(entity.space(Role::Derivative), d)?,
            ])
        };
        Ok(Self {
            quantities: [
                build(Entity::Inflow, inflow)?,
                build(Entity::Volume, volume)?,
                build(Entity::Outflow, outflow)?,
            ],
        })
    }

    pub fn get(&self, entity: Entity, role: Role) -> Quantity {
        self.quantities[entity.slot()][role.slot()]
    }

    pub fn magnitude(&self, entity: Entity) -> Quantity {
        self.get(entity, Role::Magnitude)
    }

    pub fn derivative(&self, entity: Entity) -> Quantity {
        self.get(entity, Role::Derivative)
    }

    /// Copy of `self` with every delta applied in order (each step saturates).
    pub fn apply(&self, deltas: &[Delta]) -> Self {
        let mut next = *self;
        for delta in deltas {
            next.quantities[delta.entity.slot()][delta.role.slot()].step(delta.step);
        }
        next
    }

    /// All six quantities in positional order.
    pub fn quantities(&self) -> impl Iterator<Item = (Entity, Role, Quantity)> + '_ {
        Entity::ALL
            .into_iter()
            .flat_map(move |e| Role::ALL.into_iter().map(move |r| (e, r, self.get(e, r))))
    }

    /// Landmark names, `[magnitude, derivative]` per entity.
    pub fn landmark_names(&self) -> [[&'static str; 2]; 3] {
        self.quantities.map(|[m, d]| [m.name(), d.name()])
    }

    /// Every combination of landmark indices, in lexicographic order.
    pub fn enumerate_all() -> Vec<Self> {
        let sizes: Vec<usize> = Entity::ALL
            .iter()
            .flat_map(|e| Role::ALL.iter().map(move |r| e.space(*r).len()))
            .collect();
        let total: usize = sizes.iter().product();

        let mut states = Vec::with_capacity(total);
        let mut idx = [0usize; 6];
        for _ in 0..total {
            let state = Self::from_indices([idx[0], idx[1]], [idx[2], idx[3]], [idx[4], idx[5]])
                .expect("indices bounded by space sizes");
            states.push(state);

            // odometer increment, last position fastest
            for pos in (0..6).rev() {
                idx[pos] += 1;
                if idx[pos] < sizes[pos] {
                    break;
                }
                idx[pos] = 0;
            }
        }
        states
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (entity, [m, d])) in Entity::ALL.iter().zip(self.landmark_names()).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}({}, {})", entity, m, d)?;
        }
        Ok(())
    }
}
