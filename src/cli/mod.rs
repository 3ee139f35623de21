//! CLI module - Command line interface definitions and handlers

pub mod commands;
pub mod interactive;

use clap::{Parser, Subcommand, ValueEnum};

use crate::color::Rgb;
use crate::error::ThemeError;
use crate::theme::ThemeId;

/// Folio Theme - runtime palette engine for the portfolio shell
///
/// Derives full UI palettes from a single base color, switches between
/// preset and custom themes, and previews the result in the terminal.
#[derive(Parser, Debug)]
#[command(name = "folio-theme")]
#[command(version)]
#[command(about = "🎨 Palette engine and theme switcher", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive and print the palette for a base color
    Palette(PaletteArgs),

    /// List the available themes
    Presets(PresetsArgs),

    /// Print the stylesheet for every preset plus the active theme
    Css(ThemeArgs),

    /// Choose a theme interactively
    Pick(PickArgs),

    /// Launch the terminal theme switcher (default)
    Tui(ThemeArgs),

    /// Show the sample configuration or its location
    Config(ConfigArgs),
}

#[derive(Debug, Clone, Parser)]
pub struct PaletteArgs {
    /// Base color (3- or 6-digit hex, e.g. #8b5cf6)
    #[arg(required = true)]
    pub base: String,

    /// Output format
    #[arg(long, short, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct PresetsArgs {
    /// Output format (css prints the preset stylesheet)
    #[arg(long, short, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Startup theme overrides shared by `css` and `tui`
#[derive(Debug, Clone, Parser, Default)]
pub struct ThemeArgs {
    /// Theme identifier or label (overrides config)
    #[arg(long, short, value_parser = parse_theme_id)]
    pub theme: Option<ThemeId>,

    /// Base color for the custom theme (overrides config)
    #[arg(long, short, value_parser = parse_base_color)]
    pub base: Option<Rgb>,
}

#[derive(Debug, Clone, Parser, Default)]
pub struct PickArgs {
    /// Pre-filled base color for the custom theme prompt
    #[arg(long, short, value_parser = parse_base_color)]
    pub base: Option<Rgb>,
}

#[derive(Debug, Clone, Parser)]
pub struct ConfigArgs {
    /// Print the config file path instead of the sample
    #[arg(long)]
    pub path: bool,

    /// Write the sample config if none exists yet
    #[arg(long)]
    pub init: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored swatches for humans
    Human,
    /// JSON object keyed by role
    Json,
    /// CSS custom properties
    Css,
}

fn parse_theme_id(s: &str) -> Result<ThemeId, ThemeError> {
    s.parse()
}

fn parse_base_color(s: &str) -> Result<Rgb, ThemeError> {
    Rgb::from_hex(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_palette_command() {
        let cli = Cli::parse_from(["folio-theme", "palette", "#8b5cf6", "--format", "json"]);
        match cli.command {
            Some(Commands::Palette(args)) => {
                assert_eq!(args.base, "#8b5cf6");
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_theme_overrides() {
        let cli = Cli::parse_from(["folio-theme", "tui", "--theme", "custom", "--base", "#0f0"]);
        match cli.command {
            Some(Commands::Tui(args)) => {
                assert_eq!(args.theme, Some(ThemeId::Custom));
                assert_eq!(args.base, Some(Rgb::new(0, 255, 0)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_reject_unknown_theme() {
        assert!(Cli::try_parse_from(["folio-theme", "css", "--theme", "sepia"]).is_err());
        assert!(Cli::try_parse_from(["folio-theme", "tui", "--base", "#zzz"]).is_err());
    }
}
