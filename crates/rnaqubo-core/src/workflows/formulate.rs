use crate::core::io::energy_table::EnergyTable;
use crate::core::models::ids::QuartetId;
use crate::core::models::quartet::Quartet;
use crate::core::models::sequence::Sequence;
use crate::core::qubo::program::QuadraticProgram;
use crate::core::qubo::traits::{QuboObjective, VariableIndex};
use crate::engine::coefficients::CoefficientModel;
use crate::engine::config::FormulationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormulationStats {
    pub num_quartets: usize,
    pub num_quadratic_terms: usize,
    pub stacked_pairs: usize,
    pub crossing_pairs: usize,
    pub linear_energy_sum: f64,
}

/// Everything a formulation produced, besides what was handed to the objective.
#[derive(Debug, Clone, PartialEq)]
pub struct Formulation {
    /// Quartets in generation order; `quartets[id.index()]` is quartet `id`.
    pub quartets: Vec<Quartet>,
    /// Variable index the objective assigned to each quartet, in the same order.
    pub variables: Vec<VariableIndex>,
    pub model: CoefficientModel,
    pub stats: FormulationStats,
}

impl Formulation {
    pub fn quartet(&self, id: QuartetId) -> Option<&Quartet> {
        self.quartets.get(id.index())
    }

    /// Quartets are sorted by `(i, j)`, so lookup is a binary search.
    pub fn id_of(&self, quartet: &Quartet) -> Option<QuartetId> {
        self.quartets.binary_search(quartet).ok().map(QuartetId)
    }
}

/// Formulates `sequence` as a QUBO and writes it into `objective`.
///
/// One binary variable named [`Quartet::variable_name`] is declared per quartet, then
/// `minimize` is called exactly once with the assembled coefficients. Errors from the
/// objective container are returned unchanged inside [`EngineError::Objective`].
#[instrument(skip_all, name = "formulation_workflow", fields(length = sequence.len()))]
pub fn run<O: QuboObjective>(
    sequence: &Sequence,
    energies: &EnergyTable,
    config: &FormulationConfig,
    objective: &mut O,
    reporter: &ProgressReporter,
) -> Result<Formulation, EngineError> {
    // === Phase 1: Enumerate candidate quartets ===
    reporter.report(Progress::PhaseStart {
        name: "Quartet Generation",
    });
    let quartets = tasks::quartet_generation::run(sequence);
    info!(count = quartets.len(), "Enumerated candidate quartets.");
    reporter.report(Progress::Message(format!(
        "{} candidate quartet(s)",
        quartets.len()
    )));
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Declare one binary variable per quartet ===
    reporter.report(Progress::PhaseStart {
        name: "Variable Declaration",
    });
    let variables = declare_variables(&quartets, objective)?;
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Linear terms from intrinsic energies ===
    reporter.report(Progress::PhaseStart {
        name: "Linear Terms",
    });
    let mut model = CoefficientModel::new();
    model.linear = tasks::linear_terms::run(&quartets, energies);
    reporter.report(Progress::PhaseFinish);

    // === Phase 4: Stacking rewards and crossing penalties ===
    reporter.report(Progress::PhaseStart {
        name: "Interaction Terms",
    });
    let interactions = tasks::interaction_terms::run(&quartets, &config.interaction, reporter);
    model.quadratic = interactions.quadratic;
    reporter.report(Progress::Message(format!(
        "{} stacked pair(s), {} crossing pair(s)",
        interactions.stacked_pairs, interactions.crossing_pairs
    )));
    reporter.report(Progress::PhaseFinish);

    // === Phase 5: Hand the objective to the container ===
    reporter.report(Progress::PhaseStart {
        name: "Objective Assembly",
    });
    let (linear, quadratic) = model.to_variable_terms(&variables);
    objective
        .minimize(&linear, &quadratic)
        .map_err(EngineError::objective)?;
    reporter.report(Progress::PhaseFinish);

    let stats = FormulationStats {
        num_quartets: quartets.len(),
        num_quadratic_terms: model.quadratic.len(),
        stacked_pairs: interactions.stacked_pairs,
        crossing_pairs: interactions.crossing_pairs,
        linear_energy_sum: model.linear_sum(),
    };
    info!(
        quartets = stats.num_quartets,
        quadratic_terms = stats.num_quadratic_terms,
        "Formulation complete."
    );

    Ok(Formulation {
        quartets,
        variables,
        model,
        stats,
    })
}

/// Formulates `sequence` into a fresh [`QuadraticProgram`] named after the config.
pub fn build_qubo(
    sequence: &str,
    energies: &EnergyTable,
    config: &FormulationConfig,
) -> Result<(QuadraticProgram, Formulation), EngineError> {
    let sequence = Sequence::new(sequence)?;
    let mut program = QuadraticProgram::new(&config.program_name);
    let formulation = run(
        &sequence,
        energies,
        config,
        &mut program,
        &ProgressReporter::new(),
    )?;
    Ok((program, formulation))
}

fn declare_variables<O: QuboObjective>(
    quartets: &[Quartet],
    objective: &mut O,
) -> Result<Vec<VariableIndex>, EngineError> {
    let variables = quartets
        .iter()
        .map(|q| objective.add_binary_variable(&q.variable_name()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(EngineError::objective)?;

    let mut owners: HashMap<VariableIndex, usize> = HashMap::with_capacity(variables.len());
    for (position, &index) in variables.iter().enumerate() {
        if let Some(&earlier) = owners.get(&index) {
            return Err(EngineError::DuplicateVariableIndex {
                index,
                first: quartets[earlier].variable_name(),
                second: quartets[position].variable_name(),
            });
        }
        owners.insert(index, position);
    }
    debug!(count = variables.len(), "Declared binary variables.");
    Ok(variables)
}
