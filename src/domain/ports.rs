use crate::domain::model::{AnalysisResult, Dataset, RuleSettings};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Byte-level I/O boundary. Reading the input file is the run's only
/// suspension point before the load stage.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn rule_settings(&self) -> &RuleSettings;
    fn render_messages(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Dataset>;
    async fn transform(&self, dataset: Dataset) -> Result<AnalysisResult>;
    async fn load(&self, result: AnalysisResult) -> Result<String>;
}
