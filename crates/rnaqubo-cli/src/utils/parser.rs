use crate::config::models::OutputFormat;
use clap::ValueEnum;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid float value for {key}: '{value}'")]
    InvalidFloat { key: String, value: String },

    #[error("Unknown output format '{0}'. Expected 'lp' or 'coo'.")]
    UnknownFormat(String),
}

/// Splits `KEY=VALUE` at the first `=`, trimming whitespace around both halves.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(pair.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_float(key: &str, value: &str) -> Result<f64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidFloat {
        key: key.to_string(),
        value: value.to_string(),
    })
}

pub fn parse_output_format(value: &str) -> Result<OutputFormat, ParseError> {
    OutputFormat::from_str(value, true).map_err(|_| ParseError::UnknownFormat(value.to_string()))
}
