//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use folio_config::Config;
use folio_core::{BackgroundStyle, ThemeMode};

/// A personal portfolio that lives in your terminal.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of particles in the field.
    #[arg(short, long, value_name = "N")]
    pub particles: Option<usize>,

    /// Theme: auto, dark or light.
    #[arg(short, long, value_name = "MODE")]
    pub theme: Option<ThemeMode>,

    /// Background: auto, blackhole, orbs or none.
    #[arg(short, long, value_name = "STYLE")]
    pub background: Option<BackgroundStyle>,

    /// Target frames per second.
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Keep the particle field from spinning.
    #[arg(long)]
    pub no_rotate: bool,
}

impl Cli {
    /// Override `config` with whatever was given on the command line.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(particles) = self.particles {
            config.particle_count = particles;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(background) = self.background {
            config.background = background;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if self.no_rotate {
            config.rotate = false;
        }
        config
    }
}
