use super::args::Cli;
use super::render::Renderer;
use super::shell::Shell;
use roster::api::RosterApi;
use roster::config::{AgeParsing, ColorMode, RosterConfig};
use roster::error::{Result, RosterError};
use roster::store::memory::InMemoryStore;
use std::io::{BufRead, Write};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr so they never interleave with prompts on stdout.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Loads the config file and applies command-line overrides.
///
/// An explicitly named file must exist; the default location may be absent.
pub fn resolve_config(cli: &Cli) -> Result<RosterConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(RosterError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            RosterConfig::load(path)?
        }
        None => match RosterConfig::default_path() {
            Some(path) => RosterConfig::load(path)?,
            None => RosterConfig::default(),
        },
    };

    if cli.strict_age {
        config.age_parsing = AgeParsing::Strict;
    }
    if let Some(color) = cli.color {
        config.color = color.into();
    }
    Ok(config)
}

pub fn use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => console::colors_enabled(),
    }
}

pub fn build_shell<R: BufRead, W: Write>(
    config: &RosterConfig,
    input: R,
    output: W,
) -> Shell<InMemoryStore, R, W> {
    info!(
        age_parsing = ?config.age_parsing,
        color = ?config.color,
        show_record_details = config.show_record_details,
        "starting shell"
    );
    let api = RosterApi::new(InMemoryStore::new()).with_age_parsing(config.age_parsing);
    Shell::new(api, input, output, Renderer::new(use_color(config.color)))
        .show_record_details(config.show_record_details)
}
