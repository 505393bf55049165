use crate::core::io::energy_table::EnergyTable;
use crate::core::models::ids::QuartetId;
use crate::core::models::quartet::Quartet;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Assigns each quartet its intrinsic free energy, defaulting to `0.0` when the table
/// has no entry for it.
#[instrument(skip_all, name = "linear_terms_task")]
pub fn run(quartets: &[Quartet], energies: &EnergyTable) -> BTreeMap<QuartetId, f64> {
    let linear: BTreeMap<QuartetId, f64> = quartets
        .iter()
        .enumerate()
        .map(|(index, quartet)| (QuartetId(index), energies.get(quartet)))
        .collect();

    let with_data = quartets.iter().filter(|q| energies.contains(q)).count();
    debug!(
        total = quartets.len(),
        with_data,
        unused_table_entries = energies.len().saturating_sub(with_data),
        "Assigned linear terms."
    );
    linear
}
