use thiserror::Error;

pub const DEFAULT_PROGRAM_NAME: &str = "RNA-Folding-QUBO";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Pairwise interaction constants of the QUBO.
///
/// Neither value is validated. The stacking reward is expected to be negative (a bonus)
/// and the crossing penalty large and positive (a deterrent); other values produce a
/// well-formed but physically meaningless model, and choosing them is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionParameters {
    pub stacking_reward: f64,
    pub crossing_penalty: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormulationConfig {
    pub interaction: InteractionParameters,
    pub program_name: String,
}

#[derive(Default)]
pub struct FormulationConfigBuilder {
    stacking_reward: Option<f64>,
    crossing_penalty: Option<f64>,
    program_name: Option<String>,
}

impl FormulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stacking_reward(mut self, reward: f64) -> Self {
        self.stacking_reward = Some(reward);
        self
    }
    pub fn crossing_penalty(mut self, penalty: f64) -> Self {
        self.crossing_penalty = Some(penalty);
        self
    }
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<FormulationConfig, ConfigError> {
        let interaction = InteractionParameters {
            stacking_reward: self
                .stacking_reward
                .ok_or(ConfigError::MissingParameter("stacking_reward"))?,
            crossing_penalty: self
                .crossing_penalty
                .ok_or(ConfigError::MissingParameter("crossing_penalty"))?,
        };
        Ok(FormulationConfig {
            interaction,
            program_name: self
                .program_name
                .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_succeeds_with_required_parameters() {
        let config = FormulationConfigBuilder::new()
            .stacking_reward(-1.5)
            .crossing_penalty(100.0)
            .build()
            .unwrap();
        assert_eq!(config.interaction.stacking_reward, -1.5);
        assert_eq!(config.interaction.crossing_penalty, 100.0);
        assert_eq!(config.program_name, DEFAULT_PROGRAM_NAME);
    }

    #[test]
    fn build_uses_custom_program_name() {
        let config = FormulationConfigBuilder::new()
            .stacking_reward(-1.0)
            .crossing_penalty(10.0)
            .program_name("hairpin")
            .build()
            .unwrap();
        assert_eq!(config.program_name, "hairpin");
    }

    #[test]
    fn build_fails_without_stacking_reward() {
        let result = FormulationConfigBuilder::new().crossing_penalty(100.0).build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("stacking_reward"))
        );
    }

    #[test]
    fn build_fails_without_crossing_penalty() {
        let result = FormulationConfigBuilder::new().stacking_reward(-1.5).build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("crossing_penalty"))
        );
    }

    #[test]
    fn build_does_not_validate_signs() {
        let config = FormulationConfigBuilder::new()
            .stacking_reward(2.0)
            .crossing_penalty(-5.0)
            .build()
            .unwrap();
        assert_eq!(config.interaction.stacking_reward, 2.0);
        assert_eq!(config.interaction.crossing_penalty, -5.0);
    }
}
