use busca_cep::app::console::{self, OutputFormat};
use busca_cep::utils::{logger, validation::Validate};
use busca_cep::{CliConfig, Result, ViaCepService};
use clap::Parser;
use std::io;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting busca-cep");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        let exit_code = console::report_error(&mut io::stderr(), &e);
        tracing::debug!(
            "Lookup failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        std::process::exit(exit_code);
    }
}

async fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;
    let service = ViaCepService::with_base_url(&config.base_url)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    console::run(
        &service,
        config.cep.as_deref(),
        OutputFormat::from_json_flag(config.json),
        &mut input,
        &mut output,
    )
    .await?;

    Ok(())
}
