//! Folio Theme - palette engine and theme switcher
//!
//! Derives UI palettes from a base color, lists and exports the preset
//! themes, and previews them interactively in the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

use folio_theme::cli::{self, commands, Cli, Commands};
use folio_theme::config::Config;
use folio_theme::logging::{self, LogSink};
use folio_theme::tui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.general.log_level.as_str()
    };

    // The TUI logs to a file so nothing is drawn over its screen
    let sink = LogSink::for_command(cli.command.as_ref());
    logging::subscriber(level, &sink, BoxMakeWriter::new(std::io::stderr))?.init();

    if let Some(e) = config_error {
        tracing::warn!("Using default config: {:#}", e);
    }

    match cli.command {
        Some(Commands::Palette(args)) => commands::run_palette(&args)?,
        Some(Commands::Presets(args)) => commands::run_presets(&args)?,
        Some(Commands::Css(args)) => commands::run_css(&args, &config)?,
        Some(Commands::Pick(args)) => cli::interactive::run_picker(&args, &config)?,
        Some(Commands::Tui(args)) => tui::run_tui(&args, &config)?,
        Some(Commands::Config(args)) => commands::run_config(&args)?,
        None => {
            // Default: run the terminal switcher
            tui::run_tui(&cli::ThemeArgs::default(), &config)?;
        }
    }

    Ok(())
}
