use clap::ValueEnum;
use rnaqubo::engine::config::FormulationConfig;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CPLEX LP text.
    Lp,
    /// Sparse upper-triangular QUBO matrix as CSV triplets.
    Coo,
}

pub struct AppConfig {
    pub energies_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub core_config: FormulationConfig,
}
