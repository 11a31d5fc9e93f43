//! Terminal front end for the reef simulation.

mod args;
mod clock;
mod render;
mod runner;
mod telemetry;

use anyhow::Result;
use reef_world::Simulation;
use render::TerminalRenderer;
use std::io::{self, IsTerminal};
use tokio::signal;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let cli = match args::parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => usage_error(&e),
    };
    if cli.help {
        println!("{}", args::USAGE);
        return Ok(());
    }

    let config = match cli.into_config(io::stdin().lock(), io::stdout()) {
        Ok(config) => config,
        Err(e) => usage_error(&e),
    };

    let mut simulation = Simulation::new(&config)?;
    info!("Starting reef with seed {}", simulation.seed());

    let mut renderer = if io::stdout().is_terminal() {
        TerminalRenderer::new(io::stdout())
    } else {
        TerminalRenderer::without_clear(io::stdout())
    };

    tokio::select! {
        result = runner::run_loop(&mut simulation, &mut renderer, &config) => result?,
        _ = shutdown_signal() => {}
    }

    let summary = simulation.summary();
    info!(
        seed = summary.seed,
        ticks = summary.ticks,
        fish = summary.census.fish,
        shrimp = summary.census.shrimp,
        total_deaths = summary.total_deaths,
        total_births = summary.total_births,
        "Run finished"
    );

    Ok(())
}

fn usage_error(err: &reef_core::Error) -> ! {
    error!("{}", err);
    eprintln!("error: {}\n\n{}", err, args::USAGE);
    std::process::exit(2);
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
