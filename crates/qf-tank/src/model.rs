//! The tank as a `QualitativeModel`.

use qf_envision::{
    Candidate, EnvisionResult, Envisionment, QualitativeModel, SearchOptions, run_envisionment,
};

use crate::rules::RuleSet;
use crate::state::SystemState;
use crate::validator::Validator;

/// Rule table plus validator: everything the driver needs to explore the tank.
#[derive(Debug, Clone, Default)]
pub struct TankModel {
    pub rules: RuleSet,
    pub validator: Validator,
}

impl TankModel {
    pub fn new(validator: Validator) -> Self {
        Self {
            rules: RuleSet::tank(),
            validator,
        }
    }

    /// Build the envisionment reachable from `initial`.
    pub fn envision(
        &self,
        initial: SystemState,
        opts: &SearchOptions,
    ) -> EnvisionResult<Envisionment<SystemState>> {
        run_envisionment(self, initial, opts)
    }
}

impl QualitativeModel for TankModel {
    type State = SystemState;

    fn candidates(&self, state: &SystemState) -> Vec<Candidate<SystemState>> {
        self.rules.candidates(state)
    }

    fn is_admissible(&self, state: &SystemState) -> bool {
        self.validator.is_valid(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_strict() {
        let model = TankModel::default();
        assert!(model.validator.strict_proportionality);
        assert_eq!(model.rules.rules().len(), 19);
    }

    #[test]
    fn empty_tank_seed_is_expanded_despite_constraints() {
        let model = TankModel::default();
        let s = SystemState::from_landmarks(
            ["zero", "positive"],
            ["zero", "positive"],
            ["zero", "positive"],
        )
        .unwrap();
        // volume rises before any inflow arrives
        assert!(!model.validator.is_valid(&s));

        let env = model.envision(s, &SearchOptions::default()).unwrap();
        assert_eq!(env.graph.initial().unwrap().state, s);
        assert_eq!(env.graph.states().len(), 19);
        assert!(
            env.graph.states()[1..]
                .iter()
                .all(|n| model.validator.is_valid(&n.state))
        );
    }

    #[test]
    fn stuck_inadmissible_seed_is_a_lone_terminal() {
        let model = TankModel::default();
        let s = SystemState::from_landmarks(
            ["zero", "negative"],
            ["zero", "zero"],
            ["zero", "zero"],
        )
        .unwrap();
        let env = model.envision(s, &SearchOptions::default()).unwrap();
        assert_eq!(env.graph.states().len(), 1);
        assert!(env.graph.states()[0].is_terminal());
    }

    #[test]
    fn closed_empty_tank_can_only_be_opened() {
        let model = TankModel::default();
        let s = SystemState::from_landmarks(["zero", "zero"], ["zero", "zero"], ["zero", "zero"])
            .unwrap();
        let env = model.envision(s, &SearchOptions::default()).unwrap();
        let first = &env.graph.transitions()[0];
        assert_eq!(first.justification, "inflow starts increasing");
        assert_eq!(env.graph.state(first.from).unwrap().successors, vec![first.to]);
    }
}
