pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    etl::{EtlEngine, RunSummary},
    pipeline::CsvJsonPipeline,
};
pub use domain::model::{FieldValue, Record};
pub use utils::error::{ConvertError, ErrorCategory, Result};
