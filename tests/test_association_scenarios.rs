use gatematch_rs::{
    associate, build_cost_matrix, scenario, AssocError, AssociationConfig,
    Padding, Position, Scenario, ScenarioConfig, DEFAULT_MAX_COST,
};
use nearly_eq::assert_nearly_eq;

const TWO_TARGETS_PATH: &str =
    "data/scenarios/two_targets_three_measurements.json";
const CLUTTER_PATH: &str = "data/scenarios/three_targets_with_clutter.json";
const MALFORMED_PATH: &str = "data/scenarios/malformed_measurement.json";
const CONFIG_PATH: &str = "data/association_config.json";

/*----------------------------------------------------------------------------
Nearest-neighbour association
----------------------------------------------------------------------------*/

#[test]
fn test_nearest_neighbor_two_targets() {
    let scenario = Scenario::from_path(TWO_TARGETS_PATH).unwrap();
    let result =
        associate(&scenario.targets, &scenario.measurements, 10.0).unwrap();

    assert_eq!(result.matches, vec![(0, 0), (1, 1)]);
    assert_nearly_eq!(
        scenario.targets[0].distance(&scenario.measurements[0]),
        1.4142135623730951,
        1e-12
    );
    // measurement 2 is far outside the gate for both targets
    assert_nearly_eq!(
        scenario.targets[0].distance(&scenario.measurements[2]),
        50.0,
        1e-12
    );
}

#[test]
fn test_nearest_neighbor_with_clutter() {
    let scenario = Scenario::from_path(CLUTTER_PATH).unwrap();
    let config = AssociationConfig::from_path(CONFIG_PATH).unwrap();

    let result = config
        .associate(&scenario.targets, &scenario.measurements)
        .unwrap();
    assert_eq!(result.matches, vec![(0, 0), (1, 1), (2, 2)]);
    assert!(result.shared_measurements().is_empty());
}

#[test]
fn test_nearest_neighbor_is_repeatable() {
    let scenario = Scenario::from_path(CLUTTER_PATH).unwrap();
    let first =
        associate(&scenario.targets, &scenario.measurements, 3.0).unwrap();
    for _ in 0..5 {
        let again =
            associate(&scenario.targets, &scenario.measurements, 3.0).unwrap();
        assert_eq!(again, first);
    }
}

/*----------------------------------------------------------------------------
Cost matrix
----------------------------------------------------------------------------*/

#[test]
fn test_cost_matrix_two_targets() {
    let scenario = Scenario::from_path(TWO_TARGETS_PATH).unwrap();
    let cost = build_cost_matrix(
        &scenario.targets,
        &scenario.measurements,
        DEFAULT_MAX_COST,
    )
    .unwrap();

    assert_eq!(cost.padding(), Padding::Rows(1));
    let rows = cost.to_rows();
    assert_eq!(rows.len(), 3);
    for row in rows.iter() {
        assert_eq!(row.len(), 3);
    }

    let expected = [
        [1.4142135623730951, 28.319604517012593, 50.0],
        [28.319604517012593, 1.4142135623730951, 22.360679774997898],
    ];
    for i in 0..2 {
        for j in 0..3 {
            assert_nearly_eq!(rows[i][j], expected[i][j], 1e-9);
        }
    }
    assert_eq!(rows[2], vec![1000.0, 1000.0, 1000.0]);
}

#[test]
fn test_cost_matrix_with_clutter() {
    let scenario = Scenario::from_path(CLUTTER_PATH).unwrap();
    let config = AssociationConfig::from_path(CONFIG_PATH).unwrap();

    let cost = config
        .build_cost_matrix(&scenario.targets, &scenario.measurements)
        .unwrap();
    assert_eq!(cost.size(), 5);
    assert_eq!(cost.padding(), Padding::Rows(2));
    assert!(cost.dominates_real_costs());
    for i in 3..5 {
        for j in 0..5 {
            assert!(cost.is_padding(i, j));
            assert_eq!(cost.get(i, j), Some(1000.0));
        }
    }
}

#[test]
fn test_matcher_and_cost_matrix_agree() {
    let scenario = scenario::generate(&ScenarioConfig {
        n_objects: 12,
        n_clutter: 30,
        noise_std: 2.0,
        area_size: 200,
        seed: Some(2024),
    })
    .unwrap();

    let association =
        associate(&scenario.targets, &scenario.measurements, 8.0).unwrap();
    let cost = build_cost_matrix(
        &scenario.targets,
        &scenario.measurements,
        DEFAULT_MAX_COST,
    )
    .unwrap();

    for &(t, m) in association.iter() {
        let row_min = (0..cost.n_measurements())
            .filter_map(|j| cost.get(t, j))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(cost.get(t, m), Some(row_min));
        assert!(row_min < 8.0);
    }
}

/*----------------------------------------------------------------------------
Malformed input
----------------------------------------------------------------------------*/

#[test]
fn test_malformed_scenario_file() {
    let res = Scenario::from_path(MALFORMED_PATH);
    assert_eq!(
        res,
        Err(AssocError::InvalidInput(
            "measurement 1: expected 2 coordinates, got 1".to_string()
        ))
    );
}

#[test]
fn test_non_finite_positions_fail_both_components() {
    let targets = vec![Position::new(0.0, 0.0)];
    let measurements = vec![Position::new(f64::INFINITY, 1.0)];

    assert!(matches!(
        associate(&targets, &measurements, 10.0),
        Err(AssocError::InvalidInput(_))
    ));
    assert!(matches!(
        build_cost_matrix(&targets, &measurements, 1000.0),
        Err(AssocError::InvalidInput(_))
    ));
}
