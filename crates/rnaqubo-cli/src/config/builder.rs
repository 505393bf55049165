use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::FormulateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use rnaqubo::engine::config::FormulationConfigBuilder;
use tracing::{debug, warn};

pub fn build_config(args: &FormulateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let interaction_file = file_config.interaction.take().unwrap_or_default();
    let stacking_reward = args
        .stacking_reward
        .or(interaction_file.stacking_reward)
        .unwrap_or(defaults.stacking_reward);
    let crossing_penalty = args
        .crossing_penalty
        .or(interaction_file.crossing_penalty)
        .unwrap_or(defaults.crossing_penalty);

    let output_file = file_config.output.take().unwrap_or_default();
    let format = args
        .format
        .or(output_file.format)
        .unwrap_or(defaults.format);
    let program_name = args
        .name
        .clone()
        .or(output_file.program_name)
        .unwrap_or(defaults.program_name);

    warn_on_unusual_parameters(stacking_reward, crossing_penalty);

    let core_config = FormulationConfigBuilder::new()
        .stacking_reward(stacking_reward)
        .crossing_penalty(crossing_penalty)
        .program_name(program_name)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    debug!("Resolved formulation config: {:?}", core_config);

    Ok(AppConfig {
        energies_path: args.energies.clone(),
        output_path: args.output.clone(),
        format,
        core_config,
    })
}

/// The library accepts any values; the CLI only points out likely mistakes.
fn warn_on_unusual_parameters(stacking_reward: f64, crossing_penalty: f64) {
    if stacking_reward > 0.0 {
        warn!(
            stacking_reward,
            "Stacking reward is positive; stacked quartets will be penalized instead of rewarded."
        );
    }
    if crossing_penalty <= 0.0 {
        warn!(
            crossing_penalty,
            "Crossing penalty is not positive; crossing quartets will not be deterred."
        );
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "interaction.stacking-reward" => {
                config
                    .interaction
                    .get_or_insert_with(Default::default)
                    .stacking_reward = Some(
                    parser::parse_float(key, value_str)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "interaction.crossing-penalty" => {
                config
                    .interaction
                    .get_or_insert_with(Default::default)
                    .crossing_penalty = Some(
                    parser::parse_float(key, value_str)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "output.format" => {
                config.output.get_or_insert_with(Default::default).format = Some(
                    parser::parse_output_format(value_str)
                        .map_err(|e| CliError::Config(e.to_string()))?,
                );
            }
            "output.program-name" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .program_name = Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
