use clap::Parser;
use wikidata_etl::core::etl::confirmation_message;
use wikidata_etl::core::ConfigProvider;
use wikidata_etl::utils::error::ErrorSeverity;
use wikidata_etl::utils::{logger, validation::Validate};
use wikidata_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, TomlConfig, WikidataPipeline};

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<String, EtlError> {
    config.validate()?;

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = WikidataPipeline::new(storage, config);

    EtlEngine::new(pipeline).run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.json_logs);
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => run(config).await,
                Err(e) => Err(e),
            }
        }
        None => run(cli).await,
    };

    match result {
        Ok(output_path) => {
            println!("{}", confirmation_message(&output_path));
        }
        Err(e) => {
            tracing::error!(
                "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            // 依嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
