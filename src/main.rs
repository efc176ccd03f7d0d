use clap::Parser;
use hypotenuse::utils::logger;
use hypotenuse::{Calculator, CliConfig, HypotError, Settings};

fn main() {
    let config = CliConfig::parse();

    // 先讀設定檔才能決定日誌等級；載入錯誤在日誌初始化後回報
    let settings = Settings::from_cli(&config);
    let config_level = settings.as_ref().ok().and_then(|s| s.log_level);
    logger::init_cli_logger(config.verbose, config_level);

    tracing::debug!("CLI config: {:?}", config);

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    tracing::debug!("Effective settings: {:?}", settings);

    let calculator = Calculator::new(settings);
    match calculator.run(config.a, config.b) {
        Ok(output) => println!("{}", output),
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &HypotError) -> ! {
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
