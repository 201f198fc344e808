use clap::Parser;
use outreach_etl::utils::monitor::SystemMonitor;
use outreach_etl::utils::{logger, validation::Validate};
use outreach_etl::{AnalyzerEngine, CliConfig, LocalStorage, SegmentationPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting outreach-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = config.resolve_rules() {
        tracing::error!("❌ Could not load rules file: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let monitor = SystemMonitor::new(config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = SegmentationPipeline::new(storage, config);
    let engine = AnalyzerEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            monitor.log_final_stats();
            tracing::info!("✅ Analysis completed successfully!");
            println!("✅ Analysis completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Analysis failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
