use anyhow::Context;
use clap::Parser;
use extkit::app::commands;
use extkit::ext::error::ErrorExt;
use extkit::utils::{logger, validation::Validate};
use extkit::{CliConfig, ErrorCategory, Settings};

fn load_settings(config: &CliConfig) -> anyhow::Result<()> {
    let Some(path) = &config.config else {
        return Ok(());
    };

    tracing::info!("📁 Loading settings from: {}", path.display());
    let settings = Settings::from_file(path)
        .with_context(|| format!("Failed to load settings file '{}'", path.display()))?;
    Settings::install(settings).context("Settings failed validation")?;
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting extkit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證參數
    if let Err(e) = config.validate() {
        e.log_error("Argument validation failed");
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    // 載入設定檔
    if let Err(e) = load_settings(&config) {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        eprintln!("💡 Make sure the file exists and is valid TOML format");
        std::process::exit(1);
    }

    match commands::execute(&config.command) {
        Ok(summary) => {
            tracing::info!("✅ Done");
            println!("{}", summary);
        }
        Err(e) => {
            e.log_error("Command failed");
            eprintln!("❌ {}", e.full_message());

            // 依錯誤類別決定退出碼
            let exit_code = match e.category() {
                ErrorCategory::Argument | ErrorCategory::Config => 2,
                ErrorCategory::Io => 3,
                ErrorCategory::Format | ErrorCategory::Crypto => 4,
                ErrorCategory::Arithmetic | ErrorCategory::Async => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
