//! zoom-meeting CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use zoom_meeting_client::actions::DesktopSink;
use zoom_meeting_client::app;
use zoom_meeting_client::cli::Cli;
use zoom_meeting_client::config;
use zoom_meeting_client::error::ClientResult;
use zoom_meeting_core::{init_tracing, TracingConfig};
use zoom_meeting_providers::zoom::ZoomConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let credentials_path = match cli.config {
        Some(ref path) => path.clone(),
        None => config::default_path()?,
    };

    let mut zoom = ZoomConfig::new();
    if let Some(timeout) = cli.timeout() {
        zoom = zoom.with_timeout(timeout);
    }

    let request = cli.meeting_request(chrono::Local::now().fixed_offset());

    let mut stdout = std::io::stdout().lock();
    app::run(&credentials_path, &zoom, &request, &DesktopSink, &mut stdout).await?;
    Ok(())
}
