use clap::Parser;
use itc_filters::core::ConfigProvider;
use itc_filters::utils::error::{ErrorSeverity, FilterError};
use itc_filters::utils::{logger, validation::Validate};
use itc_filters::{CliConfig, LocalStorage, ReportEngine, ResultsPipeline, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.log_format, config.verbose)?;

    tracing::info!("Starting itc-filters report");
    tracing::debug!("CLI config: {:?}", config);

    let result = match config.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(&path).and_then(run)
        }
        None => run(config),
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Report completed successfully!");
            println!("✅ Report completed successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(exit_code(&e));
        }
    }
}

fn run<C: ConfigProvider + Validate>(config: C) -> Result<String, FilterError> {
    // 驗證配置
    config.validate()?;

    let storage = LocalStorage::default();
    let pipeline = ResultsPipeline::new(storage, config);
    ReportEngine::new(pipeline).run()
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(error: &FilterError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
