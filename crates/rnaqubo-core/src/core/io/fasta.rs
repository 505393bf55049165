//! Minimal FASTA reader for single RNA sequences.
//!
//! Only the first record is read. Files without a `>` header are treated as a bare
//! sequence. Whitespace inside sequence lines is dropped, `;` lines are comments, and
//! `T`/`t` is transcribed to `U`/`u` so DNA input can be formulated directly.

use crate::core::models::sequence::{Sequence, SequenceError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No sequence data found in input")]
    NoSequence,
    #[error("Invalid sequence: {0}")]
    Sequence(#[from] SequenceError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: Option<String>,
    pub sequence: Sequence,
}

pub fn read_sequence(reader: &mut impl BufRead) -> Result<FastaRecord, FastaError> {
    let mut header = None;
    let mut residues = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        if let Some(title) = line.strip_prefix('>') {
            if header.is_some() || !residues.is_empty() {
                break;
            }
            header = Some(title.trim().to_string());
            continue;
        }
        residues.extend(line.chars().filter(|c| !c.is_whitespace()).map(transcribe));
    }

    if residues.is_empty() {
        return Err(FastaError::NoSequence);
    }
    Ok(FastaRecord {
        header,
        sequence: Sequence::new(&residues)?,
    })
}

pub fn read_sequence_from_path<P: AsRef<Path>>(path: P) -> Result<FastaRecord, FastaError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_sequence(&mut reader)
}

fn transcribe(c: char) -> char {
    match c {
        'T' => 'U',
        't' => 'u',
        other => other,
    }
}
