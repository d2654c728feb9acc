mod app;
mod cli;
mod data;
mod error;
mod pipeline;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use pipeline::PlotConfig;
use ui::ViewerRenderer;

fn main() -> ExitCode {
    env_logger::init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let config = PlotConfig::try_from(Cli::parse())?;
    pipeline::run(&config, &mut ViewerRenderer)
}
