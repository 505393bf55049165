use itertools::Itertools;
use rnaqubo::core::io::energy_table::EnergyTable;
use rnaqubo::core::models::ids::QuartetId;
use rnaqubo::core::models::quartet::Quartet;
use rnaqubo::core::qubo::program::QuadraticProgram;
use rnaqubo::core::relations::{are_stacked, is_crossing};
use rnaqubo::engine::config::{FormulationConfig, FormulationConfigBuilder};
use rnaqubo::workflows::formulate::{Formulation, build_qubo};

const EXAMPLE_SEQUENCE: &str = "GCGAUAGCGC";
const HELIX_SEQUENCE: &str = "GGGGAAAACCCC";
const LONG_SEQUENCE: &str = "AUGGCCAUUGUAAUGGGCCGCUGAAAGGGUGCCCGA";

fn config(reward: f64, penalty: f64) -> FormulationConfig {
    FormulationConfigBuilder::new()
        .stacking_reward(reward)
        .crossing_penalty(penalty)
        .build()
        .unwrap()
}

fn example_energies() -> EnergyTable {
    EnergyTable::from_tuples([([0, 9, 1, 8], -3.3), ([2, 7, 3, 6], -2.1)]).unwrap()
}

fn build(sequence: &str, energies: &EnergyTable) -> (QuadraticProgram, Formulation) {
    build_qubo(sequence, energies, &config(-1.5, 100.0)).unwrap()
}

#[test]
fn example_hairpin_scenario() {
    let (program, formulation) = build(EXAMPLE_SEQUENCE, &example_energies());

    // A-G does not pair, so (2, 7, 3, 6) is never a candidate and its energy is unused.
    assert_eq!(
        formulation.quartets,
        vec![Quartet::new(0, 7), Quartet::new(0, 9), Quartet::new(1, 8)]
    );
    assert_eq!(program.variable_names(), ["q_0_7_1_6", "q_0_9_1_8", "q_1_8_2_7"]);

    assert_eq!(program.linear_coefficient("q_0_9_1_8"), Some(-3.3));
    assert_eq!(program.linear_coefficient("q_0_7_1_6"), Some(0.0));
    assert_eq!(program.linear_coefficient("q_1_8_2_7"), Some(0.0));

    // Outer pairs (0, 7) and (1, 8) interleave as 0 < 1 < 7 < 8.
    assert_eq!(
        program.quadratic_coefficient("q_0_7_1_6", "q_1_8_2_7"),
        Some(100.0)
    );
    // (0, 9) encloses both others, and (0, 9)/(1, 8) share a pair without stacking.
    assert_eq!(program.quadratic_coefficient("q_0_9_1_8", "q_1_8_2_7"), None);
    assert_eq!(program.quadratic_coefficient("q_0_7_1_6", "q_0_9_1_8"), None);

    assert_eq!(formulation.stats.crossing_pairs, 1);
    assert_eq!(formulation.stats.stacked_pairs, 0);
}

#[test]
fn non_ascii_bases_are_formulated_as_non_pairing() {
    let (plain_program, plain) = build(EXAMPLE_SEQUENCE, &EnergyTable::new());
    let (program, formulation) = build("GCGAUAGCGCé", &EnergyTable::new());

    assert_eq!(formulation.quartets, plain.quartets);
    assert_eq!(program.variable_names(), plain_program.variable_names());
    assert_eq!(program.objective(), plain_program.objective());
}

#[test]
fn stacked_helix_is_rewarded_and_crossing_selection_is_penalized() {
    let energies =
        EnergyTable::from_tuples([([0, 11, 1, 10], -3.0), ([2, 9, 3, 8], -2.0)]).unwrap();
    let (program, formulation) = build(HELIX_SEQUENCE, &energies);

    assert_eq!(formulation.stats.num_quartets, 9);
    assert_eq!(formulation.stats.stacked_pairs, 1);
    assert_eq!(
        program.quadratic_coefficient("q_0_11_1_10", "q_2_9_3_8"),
        Some(-1.5)
    );

    let outer = formulation.id_of(&Quartet::new(0, 11)).unwrap();
    let inner = formulation.id_of(&Quartet::new(2, 9)).unwrap();
    let mut helix = vec![false; program.num_variables()];
    helix[formulation.variables[outer.index()]] = true;
    helix[formulation.variables[inner.index()]] = true;
    assert!((program.evaluate(&helix).unwrap() - (-6.5)).abs() < 1e-12);

    let a = formulation.id_of(&Quartet::new(0, 9)).unwrap();
    let b = formulation.id_of(&Quartet::new(1, 10)).unwrap();
    let mut pseudoknot = vec![false; program.num_variables()];
    pseudoknot[formulation.variables[a.index()]] = true;
    pseudoknot[formulation.variables[b.index()]] = true;
    assert_eq!(program.evaluate(&pseudoknot).unwrap(), 100.0);
}

#[test]
fn linear_sum_matches_energy_lookups() {
    let energies = EnergyTable::from_tuples([
        ([0, 7, 1, 6], -1.25),
        ([2, 33, 3, 32], -2.5),
        ([7, 35, 8, 34], -0.75),
        // Not a generated quartet for this sequence.
        ([3, 12, 4, 11], -9.0),
    ])
    .unwrap();
    let (_, formulation) = build(LONG_SEQUENCE, &energies);

    let expected: f64 = formulation.quartets.iter().map(|q| energies.get(q)).sum();
    assert!((formulation.model.linear_sum() - expected).abs() < 1e-12);
    assert!((formulation.stats.linear_energy_sum - (-4.5)).abs() < 1e-12);
    assert_eq!(formulation.model.linear.len(), formulation.quartets.len());
}

#[test]
fn empty_energy_table_assembles_with_zero_linear_terms() {
    let (program, formulation) = build(LONG_SEQUENCE, &EnergyTable::new());
    assert!(formulation.model.linear.values().all(|&v| v == 0.0));
    assert_eq!(program.num_variables(), formulation.quartets.len());
    assert!(program.objective().is_some());
}

#[test]
fn quadratic_keys_match_pairwise_predicates() {
    let (_, formulation) = build(LONG_SEQUENCE, &EnergyTable::new());
    let quartets = &formulation.quartets;

    for ((a, qa), (b, qb)) in quartets.iter().enumerate().tuple_combinations() {
        let expected = match (are_stacked(qa, qb), is_crossing(qa, qb)) {
            (false, false) => None,
            (true, false) => Some(-1.5),
            (false, true) => Some(100.0),
            (true, true) => panic!("{qa} and {qb} are both stacked and crossing"),
        };
        assert_eq!(
            formulation
                .model
                .quadratic_coefficient(QuartetId(a), QuartetId(b)),
            expected,
            "{qa} / {qb}"
        );
    }
}

#[test]
fn each_unordered_pair_has_at_most_one_key() {
    let (program, formulation) = build(LONG_SEQUENCE, &EnergyTable::new());
    let keys: Vec<_> = program.objective().unwrap().quadratic.keys().copied().collect();

    assert!(keys.iter().all(|(a, b)| a < b));
    assert_eq!(keys.iter().unique().count(), keys.len());
    assert_eq!(keys.len(), formulation.model.quadratic.len());
    assert_eq!(
        keys.len(),
        formulation.stats.stacked_pairs + formulation.stats.crossing_pairs
    );
}

#[test]
fn repeated_formulations_are_bit_identical() {
    let energies = example_energies();
    let (first_program, first) = build(LONG_SEQUENCE, &energies);
    let (second_program, second) = build(LONG_SEQUENCE, &energies);

    assert_eq!(first, second);
    assert_eq!(first_program, second_program);

    let bits = |f: &Formulation| {
        f.model
            .quadratic
            .values()
            .chain(f.model.linear.values())
            .map(|v| v.to_bits())
            .collect::<Vec<_>>()
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn interaction_parameters_are_not_validated() {
    let (program, _) = build_qubo(EXAMPLE_SEQUENCE, &EnergyTable::new(), &config(5.0, -100.0)).unwrap();
    assert_eq!(
        program.quadratic_coefficient("q_0_7_1_6", "q_1_8_2_7"),
        Some(-100.0)
    );
}

#[test]
fn lp_export_contains_the_assembled_model() {
    let (program, _) = build(EXAMPLE_SEQUENCE, &example_energies());
    let lp = program.export_lp_string();
    assert!(lp.contains("\\Problem name: RNA-Folding-QUBO"));
    assert!(lp.contains(" obj: - 3.3 q_0_9_1_8 + [ 200 q_0_7_1_6*q_1_8_2_7 ]/2\n"));
    assert!(lp.contains("Binaries\n q_0_7_1_6 q_0_9_1_8 q_1_8_2_7\n"));
}
