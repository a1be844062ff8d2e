use clap::Parser;
use podium_bet::app::commands::run;
use podium_bet::utils::logger;
use podium_bet::CliConfig;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting podium-bet CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(config.command, &mut stdout) {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ podium-bet failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
