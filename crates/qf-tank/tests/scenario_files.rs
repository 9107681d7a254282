use qf_envision::ExpansionOrder;
use qf_tank::{QuantityPair, Scenario, TankError, TankModel};

#[test]
fn scenario_survives_save_and_load() {
    let path = std::env::temp_dir().join("qf_tank_scenario_roundtrip.yaml");

    let mut scenario = Scenario::empty_tank();
    scenario.name = Some("half-full-draining".to_string());
    scenario.initial.inflow = QuantityPair::new("zero", "zero");
    scenario.initial.volume = QuantityPair::new("positive", "negative");
    scenario.initial.outflow = QuantityPair::new("positive", "negative");
    scenario.search.order = ExpansionOrder::DepthFirst;
    scenario.save(&path).unwrap();

    let loaded = Scenario::load(&path).unwrap();
    assert_eq!(loaded, scenario);

    // the loaded scenario drives a run end to end
    let env = TankModel::new(loaded.validator())
        .envision(loaded.initial_state().unwrap(), &loaded.search_options())
        .unwrap();
    assert_eq!(env.graph.initial().unwrap().state, loaded.initial_state().unwrap());
    assert!(env.graph.states().len() > 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("qf_tank_no_such_scenario.yaml");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(Scenario::load(&path), Err(TankError::Io(_))));
}

#[test]
fn unknown_landmark_is_reported_on_resolve() {
    let yaml = r#"
name: bad-landmark
initial:
  inflow: { magnitude: maximum, derivative: zero }
  volume: { magnitude: zero, derivative: zero }
  outflow: { magnitude: zero, derivative: zero }
"#;
    let scenario = Scenario::from_yaml_str(yaml).unwrap();
    let err = scenario.initial_state().unwrap_err();
    assert!(matches!(err, TankError::Core(_)));
    assert!(err.to_string().contains("maximum"));
}
