use outreach_etl::domain::model::RuleSettings;
use outreach_etl::{AnalyzerEngine, CliConfig, LocalStorage, SegmentationPipeline};
use tempfile::TempDir;

const SAMPLE_CSV: &str = "\
name,email,gpa,country,firstGeneration,financialAidInterest,householdIncome,academicInterests
Ana,ana@example.com,3.95,Spain,false,Low,90000,Biology
Sam,sam@example.com,2.8,USA,true,High,40000,History
";

fn config(input: &str, output: &str) -> CliConfig {
    CliConfig {
        input: input.to_string(),
        output_path: output.to_string(),
        rules_file: None,
        render_messages: false,
        verbose: false,
        monitor: false,
        rules: RuleSettings::default(),
    }
}

#[tokio::test]
async fn test_end_to_end_analysis_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("students.csv");
    std::fs::write(&input_path, SAMPLE_CSV).unwrap();
    let output_path = temp_dir.path().join("output");
    let output_str = output_path.to_str().unwrap().to_string();

    let config = config(input_path.to_str().unwrap(), &output_str);
    let storage = LocalStorage::new(output_str.clone());
    let pipeline = SegmentationPipeline::new(storage, config);
    let engine = AnalyzerEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), output_str);

    // The report lists every canonical segment with its size.
    let report: serde_json::Value =
        serde_json::from_slice(&std::fs::read(output_path.join("report.json")).unwrap()).unwrap();
    assert_eq!(report["total_records"], 2);

    let segments = report["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 4);

    let size_of = |name: &str| -> u64 {
        segments
            .iter()
            .find(|s| s["name"] == name)
            .expect("segment present in report")["size"]
            .as_u64()
            .unwrap()
    };
    assert_eq!(size_of("High Achievers"), 1);
    assert_eq!(size_of("International Prospects"), 1);
    assert_eq!(size_of("First Generation Students"), 1);
    assert_eq!(size_of("High Financial Need"), 1);

    // Ana lands in the achievers export, Sam in the first-gen export.
    let achievers =
        std::fs::read_to_string(output_path.join("segments/high-achievers.csv")).unwrap();
    assert!(achievers.starts_with(
        "name,email,gpa,country,firstGeneration,financialAidInterest,householdIncome,academicInterests"
    ));
    assert!(achievers.contains("ana@example.com"));
    assert!(!achievers.contains("sam@example.com"));

    let first_gen =
        std::fs::read_to_string(output_path.join("segments/first-generation-students.csv"))
            .unwrap();
    assert!(first_gen.contains("sam@example.com"));

    // Outreach was not requested.
    assert!(!output_path.join("outreach").exists());
}

#[tokio::test]
async fn test_end_to_end_with_rendered_outreach() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("students.csv");
    std::fs::write(&input_path, SAMPLE_CSV).unwrap();
    let output_path = temp_dir.path().join("output");
    let output_str = output_path.to_str().unwrap().to_string();

    let mut config = config(input_path.to_str().unwrap(), &output_str);
    config.render_messages = true;

    let storage = LocalStorage::new(output_str.clone());
    let pipeline = SegmentationPipeline::new(storage, config);
    let engine = AnalyzerEngine::new(pipeline);

    engine.run().await.unwrap();

    let outreach =
        std::fs::read_to_string(output_path.join("outreach/high-achievers.txt")).unwrap();
    assert!(outreach.contains("To: ana@example.com"));
    assert!(outreach.contains("Dear Ana, Based on your outstanding academic performance (GPA: 3.95)"));

    let aid = std::fs::read_to_string(output_path.join("outreach/high-financial-need.txt")).unwrap();
    assert!(aid.contains("To: sam@example.com"));
    assert!(aid.contains("Subject: Financial Aid Opportunities"));
}

#[tokio::test]
async fn test_end_to_end_with_rules_file_override() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("students.csv");
    std::fs::write(&input_path, SAMPLE_CSV).unwrap();
    let rules_path = temp_dir.path().join("rules.toml");
    std::fs::write(
        &rules_path,
        "[rules]\nhome_country = \"Spain\"\nhigh_achiever_gpa = 2.5\n",
    )
    .unwrap();
    let output_path = temp_dir.path().join("output");
    let output_str = output_path.to_str().unwrap().to_string();

    let mut config = config(input_path.to_str().unwrap(), &output_str);
    config.rules_file = Some(rules_path.to_str().unwrap().to_string());
    config.resolve_rules().unwrap();

    let storage = LocalStorage::new(output_str.clone());
    let pipeline = SegmentationPipeline::new(storage, config);
    let engine = AnalyzerEngine::new(pipeline);

    engine.run().await.unwrap();

    let report: serde_json::Value =
        serde_json::from_slice(&std::fs::read(output_path.join("report.json")).unwrap()).unwrap();
    let segments = report["segments"].as_array().unwrap();

    // With the lowered GPA floor both students qualify; with Spain as home
    // country only Sam reads as international.
    let size_of = |name: &str| -> u64 {
        segments
            .iter()
            .find(|s| s["name"] == name)
            .unwrap()["size"]
            .as_u64()
            .unwrap()
    };
    assert_eq!(size_of("High Achievers"), 2);
    assert_eq!(size_of("International Prospects"), 1);

    let international =
        std::fs::read_to_string(output_path.join("segments/international-prospects.csv")).unwrap();
    assert!(international.contains("sam@example.com"));
    assert!(!international.contains("ana@example.com"));
}

#[tokio::test]
async fn test_missing_input_file_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_str = temp_dir.path().join("output").to_str().unwrap().to_string();

    let config = config("does-not-exist.csv", &output_str);
    let storage = LocalStorage::new(output_str);
    let pipeline = SegmentationPipeline::new(storage, config);
    let engine = AnalyzerEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_short_rows_still_produce_a_full_report() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("students.csv");
    // Second row is truncated after the GPA column.
    std::fs::write(
        &input_path,
        "name,email,gpa,country,firstGeneration,financialAidInterest,householdIncome\n\
         Ana,ana@example.com,3.95,Spain,false,Low,90000\n\
         Kim,kim@example.com,3.91\n",
    )
    .unwrap();
    let output_path = temp_dir.path().join("output");
    let output_str = output_path.to_str().unwrap().to_string();

    let config = config(input_path.to_str().unwrap(), &output_str);
    let storage = LocalStorage::new(output_str.clone());
    let pipeline = SegmentationPipeline::new(storage, config);
    let engine = AnalyzerEngine::new(pipeline);

    engine.run().await.unwrap();

    let report: serde_json::Value =
        serde_json::from_slice(&std::fs::read(output_path.join("report.json")).unwrap()).unwrap();
    assert_eq!(report["total_records"], 2);

    // Kim's missing country reads as empty, which is not the home country.
    let international =
        std::fs::read_to_string(output_path.join("segments/international-prospects.csv")).unwrap();
    assert!(international.contains("kim@example.com"));
    assert!(international.contains("ana@example.com"));
}
