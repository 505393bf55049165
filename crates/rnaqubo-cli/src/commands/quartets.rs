use super::{load_energies, load_sequence};
use crate::cli::QuartetsArgs;
use crate::error::Result;
use rnaqubo::core::io::energy_table::EnergyTable;
use rnaqubo::core::models::quartet::Quartet;
use rnaqubo::engine::tasks::quartet_generation;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: QuartetsArgs) -> Result<()> {
    let sequence = load_sequence(&args.sequence)?;
    let energies = load_energies(args.energies.as_deref())?;

    let quartets = quartet_generation::run(&sequence);
    info!("Found {} candidate quartet(s).", quartets.len());

    let stdout = io::stdout();
    print_table(&quartets, &energies, stdout.lock())?;
    Ok(())
}

fn print_table<W: Write>(quartets: &[Quartet], energies: &EnergyTable, mut out: W) -> Result<()> {
    if quartets.is_empty() {
        writeln!(out, "No quartets can be formed for this sequence.")?;
        return Ok(());
    }

    writeln!(out, "{:>5}  {:<24} {:<20} {:>10}", "#", "Quartet", "Variable", "Energy")?;
    for (index, quartet) in quartets.iter().enumerate() {
        writeln!(
            out,
            "{:>5}  {:<24} {:<20} {:>10.4}",
            index,
            quartet.to_string(),
            quartet.variable_name(),
            energies.get(quartet)
        )?;
    }
    writeln!(out, "\nTotal: {} quartet(s)", quartets.len())?;
    out.flush()?;
    Ok(())
}
