use std::fs::File;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context as _, Result, anyhow};
use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::info;

use gridpath_lib::{Cli, Config, Visualizer};
use gridpath_term::{App, AppConfig, CrosstermDriver};

/// How long an idle poll waits for input before redrawing.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Log to `path` if given. Without a file nothing is logged, since stderr
/// shares the terminal with the UI.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    init_logging(config.log_file.as_deref())?;
    info!("gridpath starting: {config:?}");

    let model = Visualizer::new(&config).context("cannot build the grid")?;
    let layout = model.layout();
    let driver = CrosstermDriver::new().with_mouse(config.mouse);
    let mut app = App::new(AppConfig {
        model,
        driver,
        width: layout.width(),
        height: layout.height(),
        poll_timeout: POLL_TIMEOUT,
    });
    app.run()
        .map_err(|e| anyhow!("{e}"))
        .context("terminal session failed")?;
    info!("gridpath finished: {}", app.model().status());
    Ok(())
}
