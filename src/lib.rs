pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::{engine::AnalyzerEngine, pipeline::SegmentationPipeline};
pub use crate::utils::error::{AnalyzerError, Result};
