use clap::Parser;
use csv2json::utils::{logger, validation::Validate};
use csv2json::{CliConfig, CsvJsonPipeline, EtlEngine, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger().map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::default();
    let pipeline = CsvJsonPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    let stdout = std::io::stdout();
    let mut sink = stdout.lock();

    if let Err(e) = engine.run(&mut sink) {
        tracing::error!("Conversion failed: {} (Category: {:?})", e, e.category());
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}
