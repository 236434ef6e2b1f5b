use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;

use api_speculator::cli::parse_args;
use api_speculator::logging::init_logging;
use api_speculator::scanner::interactive;
use api_speculator::{ConsoleReporter, ProbeConfig, Prober};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = match parse_args(std::env::args_os(), &mut std::io::stdout()) {
        Ok(Some(cli)) => cli,
        Ok(None) => return Ok(ExitCode::FAILURE),
        Err(e) => e.exit(),
    };

    init_logging(cli.verbose);

    let config =
        ProbeConfig::new(cli.base_url.clone()).with_timeout(Duration::from_secs(cli.timeout));
    let mut prober = Prober::new(&config)?;

    ConsoleReporter::new().print_banner(&cli.base_url);

    prober.scan_common().await;

    let stdin = std::io::stdin();
    interactive::run(&prober, stdin.lock()).await?;

    Ok(ExitCode::SUCCESS)
}
