pub mod formulate;
pub mod quartets;

use crate::cli::SequenceInput;
use crate::error::{CliError, Result};
use rnaqubo::core::io::{energy_table::EnergyTable, fasta};
use rnaqubo::core::models::sequence::Sequence;
use std::path::Path;
use tracing::info;

/// Resolves the sequence source. Literal sequences are used exactly as typed; FASTA input
/// goes through the reader's transcription.
pub(crate) fn load_sequence(input: &SequenceInput) -> Result<Sequence> {
    match (&input.sequence, &input.input) {
        (Some(literal), _) => literal
            .parse::<Sequence>()
            .map_err(|e| CliError::Argument(format!("Invalid sequence: {}", e))),
        (None, Some(path)) => {
            info!("Reading sequence from {:?}", path);
            let record = fasta::read_sequence_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })?;
            if let Some(header) = &record.header {
                info!("Using FASTA record '{}'.", header);
            }
            Ok(record.sequence)
        }
        (None, None) => Err(CliError::Argument(
            "Either --sequence or --input must be provided".to_string(),
        )),
    }
}

/// Without a path every quartet gets energy 0.
pub(crate) fn load_energies(path: Option<&Path>) -> Result<EnergyTable> {
    let Some(path) = path else {
        return Ok(EnergyTable::new());
    };

    info!("Loading quartet energies from {:?}", path);
    let table = EnergyTable::load_csv(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    info!("Loaded {} quartet energies.", table.len());
    Ok(table)
}
