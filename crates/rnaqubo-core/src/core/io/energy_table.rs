use crate::core::models::quartet::Quartet;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnergyTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Entry {positions:?} is not a quartet of the form (i, j, i+1, j-1)")]
    NotAQuartet { positions: [usize; 4] },
}

#[derive(Debug, Deserialize)]
struct EnergyRecord {
    i: usize,
    j: usize,
    k: usize,
    l: usize,
    energy: f64,
}

/// Sparse mapping from quartet to intrinsic free energy (kcal/mol).
///
/// Quartets without an entry have energy `0.0`; missing data is never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyTable {
    energies: HashMap<Quartet, f64>,
}

impl EnergyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from raw 4-tuples, rejecting any tuple that is not shaped like a
    /// quartet.
    pub fn from_tuples<I>(entries: I) -> Result<Self, EnergyTableError>
    where
        I: IntoIterator<Item = ([usize; 4], f64)>,
    {
        let mut table = Self::new();
        for (positions, energy) in entries {
            let quartet = Quartet::from_positions(positions)
                .ok_or(EnergyTableError::NotAQuartet { positions })?;
            table.insert(quartet, energy);
        }
        Ok(table)
    }

    /// Loads a CSV table with the header `i,j,k,l,energy`.
    ///
    /// Later rows for the same quartet overwrite earlier ones.
    pub fn load_csv(path: &Path) -> Result<Self, EnergyTableError> {
        let path_str = path.to_string_lossy().to_string();
        let file = std::fs::File::open(path).map_err(|e| EnergyTableError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        Self::read_csv(file).map_err(|e| match e {
            EnergyTableError::Csv { source, .. } => EnergyTableError::Csv {
                path: path_str,
                source,
            },
            other => other,
        })
    }

    pub fn read_csv<R: std::io::Read>(reader: R) -> Result<Self, EnergyTableError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut table = Self::new();
        for result in reader.deserialize::<EnergyRecord>() {
            let record = result.map_err(|e| EnergyTableError::Csv {
                path: "<reader>".to_string(),
                source: e,
            })?;
            let positions = [record.i, record.j, record.k, record.l];
            let quartet = Quartet::from_positions(positions)
                .ok_or(EnergyTableError::NotAQuartet { positions })?;
            table.insert(quartet, record.energy);
        }
        Ok(table)
    }

    pub fn insert(&mut self, quartet: Quartet, energy: f64) -> Option<f64> {
        self.energies.insert(quartet, energy)
    }

    #[inline]
    pub fn get(&self, quartet: &Quartet) -> f64 {
        self.energies.get(quartet).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, quartet: &Quartet) -> bool {
        self.energies.contains_key(quartet)
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Quartet, &f64)> {
        self.energies.iter()
    }
}

impl FromIterator<(Quartet, f64)> for EnergyTable {
    fn from_iter<T: IntoIterator<Item = (Quartet, f64)>>(iter: T) -> Self {
        Self {
            energies: iter.into_iter().collect(),
        }
    }
}
