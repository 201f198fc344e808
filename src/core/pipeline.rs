use crate::core::classifier;
use crate::core::parser::TableParser;
use crate::core::render::MessageRenderer;
use crate::core::rules::RuleCatalog;
use crate::core::summary;
use crate::core::{AnalysisResult, ConfigProvider, Dataset, Pipeline, Segment, Storage};
use crate::utils::error::{AnalyzerError, Result};

pub struct SegmentationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    parser: TableParser,
}

impl<S: Storage, C: ConfigProvider> SegmentationPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            parser: TableParser::new(),
        }
    }

    fn report_json(result: &AnalysisResult) -> Result<Vec<u8>> {
        let segments: Vec<serde_json::Value> = result
            .segments
            .iter()
            .map(|segment| {
                serde_json::json!({
                    "name": segment.name,
                    "size": segment.size(),
                    "characteristics": segment.characteristics,
                    "recommended_approach": segment.recommended_approach,
                    "templates": segment
                        .templates
                        .iter()
                        .map(|t| t.name.clone())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        let report = serde_json::json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "total_records": result.total_records,
            "segments": segments,
        });

        Ok(serde_json::to_vec_pretty(&report)?)
    }

    fn member_csv(columns: &[String], segment: &Segment) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(columns)?;
        for member in &segment.members {
            writer.write_record(columns.iter().map(|column| member.text(column)))?;
        }
        writer
            .into_inner()
            .map_err(|e| AnalyzerError::ProcessingError {
                message: format!("Failed to finish segment export: {}", e),
            })
    }

    fn outreach_text(renderer: &MessageRenderer, segment: &Segment) -> String {
        let mut out = String::new();
        for member in &segment.members {
            for template in &segment.templates {
                let message = renderer.render(template, member);
                out.push_str(&format!("== {} ==\n", template.name));
                out.push_str(&format!("To: {}\n", member.text("email")));
                out.push_str(&format!("Subject: {}\n", message.subject));
                out.push_str(&message.body);
                out.push_str("\n\n");
            }
        }
        out
    }
}

/// Directory-and-file-safe segment name: lowercase, alphanumerics kept,
/// everything else collapsed to single dashes.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SegmentationPipeline<S, C> {
    async fn extract(&self) -> Result<Dataset> {
        let path = self.config.input_path();
        tracing::debug!("Reading prospect data from: {}", path);

        let bytes = self.storage.read_file(path).await?;
        let text = String::from_utf8(bytes)?;
        let dataset = self.parser.parse(&text);

        if dataset.records.is_empty() {
            tracing::warn!("No data rows found in {}", path);
        }

        Ok(dataset)
    }

    async fn transform(&self, dataset: Dataset) -> Result<AnalysisResult> {
        let catalog = RuleCatalog::with_settings(self.config.rule_settings());
        let total_records = dataset.records.len();

        let mut segments = classifier::classify(&dataset.records, &catalog);
        for segment in &mut segments {
            summary::enrich(segment);
        }

        Ok(AnalysisResult {
            columns: dataset.columns,
            total_records,
            segments,
        })
    }

    async fn load(&self, result: AnalysisResult) -> Result<String> {
        tracing::debug!(
            "Writing report and {} segment exports",
            result.segments.len()
        );

        let report = Self::report_json(&result)?;
        self.storage.write_file("report.json", &report).await?;

        // An empty input has no columns; there is nothing to export per
        // segment beyond the report itself.
        if !result.columns.is_empty() {
            for segment in &result.segments {
                let csv_data = Self::member_csv(&result.columns, segment)?;
                let path = format!("segments/{}.csv", slug(&segment.name));
                self.storage.write_file(&path, &csv_data).await?;
            }

            if self.config.render_messages() {
                let renderer = MessageRenderer::new()?;
                for segment in &result.segments {
                    let text = Self::outreach_text(&renderer, segment);
                    let path = format!("outreach/{}.txt", slug(&segment.name));
                    self.storage.write_file(&path, text.as_bytes()).await?;
                }
            }
        }

        Ok(self.config.output_path().to_string())
    }
}
