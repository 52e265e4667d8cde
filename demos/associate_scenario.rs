use gatematch_rs::{
    scenario::{self, ScenarioConfig},
    AssociationConfig, Position, Result,
};

fn print_case(
    title: &str,
    config: &AssociationConfig,
    targets: &[Position<f64>],
    measurements: &[Position<f64>],
) -> Result<()> {
    println!("== {} ==", title);
    println!("targets:      {:?}", to_pairs(targets));
    println!("measurements: {:?}", to_pairs(measurements));

    let association = config.associate(targets, measurements)?;
    println!(
        "associations (gate {}): {:?}",
        config.gate_threshold, association.matches
    );
    if !association.unmatched_targets.is_empty() {
        println!("unmatched targets: {:?}", association.unmatched_targets);
    }
    let shared = association.shared_measurements();
    if !shared.is_empty() {
        println!("measurements claimed by several targets: {:?}", shared);
    }

    let cost = config.build_cost_matrix(targets, measurements)?;
    println!("cost matrix ({:?}):", cost.padding());
    for row in cost.to_rows() {
        let cells: Vec<String> =
            row.iter().map(|c| format!("{:8.3}", c)).collect();
        println!("  [{}]", cells.join(", "));
    }
    println!();
    Ok(())
}

fn to_pairs(positions: &[Position<f64>]) -> Vec<[f64; 2]> {
    positions.iter().map(|p| p.to_array()).collect()
}

fn main() -> Result<()> {
    let config = AssociationConfig::default();

    let targets: Vec<Position<f64>> =
        vec![[10., 20.].into(), [30., 40.].into()];
    let measurements: Vec<Position<f64>> =
        vec![[9., 21.].into(), [31., 39.].into(), [50., 50.].into()];
    print_case("fixed example", &config, &targets, &measurements)?;

    let generated = scenario::generate(&ScenarioConfig {
        seed: Some(7),
        ..ScenarioConfig::default()
    })?;
    print_case(
        "generated scenario (seed 7)",
        &config,
        &generated.targets,
        &generated.measurements,
    )?;

    Ok(())
}
