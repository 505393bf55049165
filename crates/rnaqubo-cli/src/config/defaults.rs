use super::models::OutputFormat;
use rnaqubo::engine::config::DEFAULT_PROGRAM_NAME;

pub struct DefaultsConfig {
    pub stacking_reward: f64,
    pub crossing_penalty: f64,
    pub program_name: String,
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            stacking_reward: -1.5,
            crossing_penalty: 100.0,
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
            format: OutputFormat::Lp,
        }
    }
}
