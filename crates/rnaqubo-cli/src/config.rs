//! Layered configuration for the command-line front end.
//!
//! Values are resolved from lowest to highest precedence: built-in [`defaults`], the
//! TOML [`file`], `--set KEY=VALUE` overrides, then dedicated command-line flags. The
//! [`builder`] merges them into the [`models::AppConfig`] a command runs with.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
