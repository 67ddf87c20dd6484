use clap::Parser;
use doghouse::utils::error::ErrorSeverity;
use doghouse::utils::{logger, validation::Validate};
use doghouse::{CliConfig, ConfigProvider, DogHouseEngine, HttpTransport, RunReport, TomlConfig};

async fn execute<C>(config: C, monitor: bool) -> doghouse::Result<RunReport>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    let transport = HttpTransport::from_config(&config)?;
    let mut engine = DogHouseEngine::new_with_monitoring(transport, config, monitor);
    engine.run().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = cli.config.as_deref().map(TomlConfig::from_file).transpose();
    let (verbose, json) = match &file_config {
        Ok(Some(file)) => file.logging_flags(cli.verbose, cli.json_logs),
        _ => (cli.verbose, cli.json_logs),
    };

    // 初始化日誌
    logger::init_cli_logger(verbose, json);
    tracing::info!("Starting doghouse CLI");

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let outcome = match file_config {
        Ok(Some(file)) => {
            tracing::debug!("Using config file {:?}", cli.config);
            execute(file.with_token_override(cli.token.clone()), cli.monitor).await
        }
        Ok(None) => execute(cli.clone(), cli.monitor).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => {
            tracing::info!("✅ Answer submitted at {}", report.finished_at);
            println!("✅ Answer submitted");
            println!("{}", serde_json::to_string_pretty(&report.answer)?);
            println!("📨 Response: {}", report.response);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
