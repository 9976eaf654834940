pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::{ConvertError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "orders.csv";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "csv2json", version)]
#[command(about = "Convert an orders CSV file to a JSON array on stdout")]
pub struct CliConfig {
    /// Comma-delimited input file; the first row is the header
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = self
            .input
            .to_str()
            .ok_or_else(|| ConvertError::InvalidConfigValueError {
                field: "input".to_string(),
                value: self.input.display().to_string(),
                reason: "Path is not valid UTF-8".to_string(),
            })?;
        validate_path("input", input)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.input
    }
}
