use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 選擇日誌過濾規則：RUST_LOG 優先，其次 --verbose，最後才是設定檔的 level
pub fn cli_filter(verbose: bool, config_level: Option<LevelFilter>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    if verbose {
        return EnvFilter::new("hypotenuse=debug,info");
    }

    let level = config_level.unwrap_or(LevelFilter::INFO);
    EnvFilter::new(format!("hypotenuse={}", level))
}

pub fn init_cli_logger(verbose: bool, config_level: Option<LevelFilter>) {
    tracing_subscriber::registry()
        .with(cli_filter(verbose, config_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // stdout 只輸出計算結果
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
