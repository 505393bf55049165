use super::{load_energies, load_sequence};
use crate::cli::FormulateArgs;
use crate::config::{builder::build_config, models::OutputFormat};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use rnaqubo::{
    core::qubo::program::QuadraticProgram, engine::progress::ProgressReporter, workflows,
};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

pub fn run(args: FormulateArgs) -> Result<()> {
    let app_config = build_config(&args)?;

    let sequence = load_sequence(&args.sequence)?;
    info!("Sequence has {} nucleotides.", sequence.len());
    if app_config.energies_path.is_none() {
        warn!("No energy table given; every quartet gets energy 0.");
    }
    let energies = load_energies(app_config.energies_path.as_deref())?;

    let mut program = QuadraticProgram::new(&app_config.core_config.program_name);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core formulation workflow...");
    let formulation = workflows::formulate::run(
        &sequence,
        &energies,
        &app_config.core_config,
        &mut program,
        &reporter,
    )?;

    let stats = &formulation.stats;
    if stats.num_quartets == 0 {
        warn!("No quartets could be formed; the exported model is empty.");
    }
    eprintln!(
        "Formulated {} quartet variable(s): {} stacked pair(s), {} crossing pair(s).",
        stats.num_quartets, stats.stacked_pairs, stats.crossing_pairs
    );

    match &app_config.output_path {
        Some(path) => {
            info!("Writing {:?} model to {:?}", app_config.format, path);
            let file = File::create(path).map_err(CliError::Io)?;
            write_program(&program, app_config.format, BufWriter::new(file))?;
            eprintln!("Model written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_program(&program, app_config.format, stdout.lock())?;
        }
    }

    Ok(())
}

fn write_program<W: Write>(
    program: &QuadraticProgram,
    format: OutputFormat,
    mut out: W,
) -> Result<()> {
    match format {
        OutputFormat::Lp => {
            out.write_all(program.export_lp_string().as_bytes())?;
            out.flush()?;
        }
        OutputFormat::Coo => write_coo(program, out)?,
    }
    Ok(())
}

#[derive(Serialize)]
struct CooRecord<'a> {
    row: usize,
    col: usize,
    row_variable: &'a str,
    col_variable: &'a str,
    value: f64,
}

fn write_coo<W: Write>(program: &QuadraticProgram, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for entry in program.qubo_entries() {
        let record = CooRecord {
            row: entry.row,
            col: entry.col,
            row_variable: program.variable_name(entry.row).unwrap_or_default(),
            col_variable: program.variable_name(entry.col).unwrap_or_default(),
            value: entry.value,
        };
        writer
            .serialize(record)
            .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to write COO record: {}", e)))?;
    }
    writer.flush()?;
    Ok(())
}
