use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives one full run: extract, transform, load. A run's output wholly
/// replaces whatever a previous run produced under the same output root.
pub struct AnalyzerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalyzerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting audience analysis...");

        tracing::info!("Extracting prospect data...");
        let dataset = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", dataset.records.len());

        tracing::info!("Classifying audience segments...");
        let result = self.pipeline.transform(dataset).await?;
        for segment in &result.segments {
            tracing::info!("  {} -> {} prospects", segment.name, segment.size());
        }

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
