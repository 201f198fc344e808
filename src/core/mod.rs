pub mod classifier;
pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod rules;
pub mod summary;

pub use crate::domain::model::{
    AnalysisResult, Dataset, Record, RenderedMessage, RuleSettings, Segment, Template,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
