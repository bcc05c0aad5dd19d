use anyhow::Context;
use basic_ops::config::Command;
use basic_ops::core::{ConfigProvider, Operation, OutputFormat};
use basic_ops::utils::error::ErrorSeverity;
use basic_ops::utils::{logger, validation::Validate};
use basic_ops::{BatchConfig, CliConfig, OpsEngine, OpsError};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        if let Some(ops_err) = e.downcast_ref::<OpsError>() {
            tracing::error!("❌ {} (Severity: {:?})", ops_err, ops_err.severity());
            eprintln!("💡 {}", ops_err.recovery_suggestion());
        }
        eprintln!("❌ Error: {e:#}");
        std::process::exit(exit_code(&e));
    }
}

/// 根據錯誤嚴重程度決定退出碼
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<OpsError>().map(OpsError::severity) {
        Some(ErrorSeverity::Medium) => 2,
        Some(ErrorSeverity::High) | None => 1,
        Some(ErrorSeverity::Critical) => 3,
    }
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    let operation = match config.command.clone() {
        Command::Greet { name } => Operation::Greet { name },
        Command::Subtract { a, b } => Operation::Subtract { a, b },
        Command::Divide { x, y } => Operation::Divide { x, y },
        Command::Batch { config: path } => return run_batch(&path, config),
    };

    let engine = OpsEngine::new(config);
    let outcome = engine.evaluate(&operation)?;

    match engine.config().output_format() {
        OutputFormat::Text => println!("{outcome}"),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&outcome).map_err(OpsError::from)?)
        }
    }

    Ok(())
}

fn run_batch(path: &str, cli: CliConfig) -> anyhow::Result<()> {
    tracing::info!("📁 Loading batch from: {}", path);

    let mut batch = BatchConfig::from_file(path)
        .with_context(|| format!("failed to load batch file '{path}'"))?;
    batch.apply_overrides(cli.strict, cli.format);
    batch.validate()?;

    let operations = std::mem::take(&mut batch.operations);
    let engine = OpsEngine::new(batch);
    let report = engine.run_batch(&operations)?;

    println!("{}", basic_ops::render(&report, engine.config().output_format())?);

    if report.has_failures() {
        // 部分失敗：結果已輸出，以操作錯誤退出碼結束
        return Err(OpsError::PartialFailure {
            failed: report.failed,
            total: report.evaluated,
        }
        .into());
    }

    Ok(())
}
