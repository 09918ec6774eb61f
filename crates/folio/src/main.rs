use std::io;

use chrono::{Local, Timelike};
use clap::Parser;
use folio_config::{Config, ConfigError};
use folio_core::Theme;
use ratatui::DefaultTerminal;

mod app;
mod cli;
mod content;
mod copy;
mod logging;
mod page;
mod sections;
mod terminal;

use app::App;
use cli::Cli;
use terminal::CaptureGuard;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => match Config::load() {
            Err(ConfigError::NoConfigDir) => Config::default(),
            other => other?,
        },
    };
    let config = cli.apply(config).sanitized();

    if let Some(path) = logging::init(&config.log_level) {
        tracing::info!(log = %path.display(), "logging initialized");
    }

    let theme = config.theme.resolve(Local::now().hour());
    tracing::info!(
        ?theme,
        particles = config.particle_count,
        fps = config.fps,
        background = %config.background,
        "starting"
    );

    let terminal = ratatui::init();
    let result = run(terminal, &config, theme);
    ratatui::restore();
    result
}

fn run(terminal: DefaultTerminal, config: &Config, theme: Theme) -> color_eyre::Result<()> {
    let _capture = CaptureGuard::enable(io::stdout())?;
    App::new(config, theme).run(terminal)
}
