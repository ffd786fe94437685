use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use vhoststats_core::cli::{MonitorArgs, run_monitor};
use vhoststats_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "vhoststats",
    version,
    about = "vhoststats: live per-virtual-host traffic chart for access logs"
)]
struct Cli {
    #[command(flatten)]
    monitor: MonitorArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let _log_guard =
        init_logging(cli.monitor.log_file.as_deref()).context("failed to open log file")?;

    let summary = run_monitor(&cli.monitor)?;
    tracing::debug!(?summary, "exiting");

    Ok(())
}
