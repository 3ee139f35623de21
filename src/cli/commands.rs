//! Command handlers for the non-interactive subcommands

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::cli::{ConfigArgs, OutputFormat, PaletteArgs, PresetsArgs, ThemeArgs};
use crate::color::{ColorValue, Rgb};
use crate::config::{generate_sample_config, Config};
use crate::palette::presets::preset_palette;
use crate::palette::{generate_palette_hex, Palette};
use crate::theme::surface::{css_block, preset_stylesheet};
use crate::theme::{StyleTable, ThemeController, ThemeId, ThemeState};

/// Merge command line overrides over the configured startup theme
pub fn startup_state(config: &Config, theme: Option<ThemeId>, base: Option<Rgb>) -> ThemeState {
    let mut state = config.initial_state();
    if let Some(id) = theme {
        state.identifier = id;
    }
    if let Some(color) = base {
        state.base_color = color;
    }
    state
}

/// `folio-theme palette <HEX>`
pub fn run_palette(args: &PaletteArgs) -> Result<()> {
    let palette = generate_palette_hex(&args.base)
        .with_context(|| format!("Cannot derive a palette from '{}'", args.base))?;

    match args.format {
        OutputFormat::Human => {
            let base = palette.primary().to_hsl();
            println!(
                "{} {} (hue {:.1}°, saturation {:.1}%, lightness {:.1}%)\n",
                "Palette for".bright_white().bold(),
                palette.primary(),
                base.h,
                base.s,
                base.l
            );
            print!("{}", format_palette(&palette));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&palette)?),
        OutputFormat::Css => print!("{}", css_block(":root[data-theme=\"custom\"]", &palette)),
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct PresetSummary {
    id: ThemeId,
    label: &'static str,
    primary: Option<ColorValue>,
    background: Option<ColorValue>,
}

/// `folio-theme presets`
pub fn run_presets(args: &PresetsArgs) -> Result<()> {
    let summaries = ThemeId::ALL
        .iter()
        .map(|&id| -> Result<PresetSummary> {
            let palette = if id.is_custom() {
                None
            } else {
                Some(preset_palette(id)?)
            };
            Ok(PresetSummary {
                id,
                label: id.label(),
                primary: palette.as_ref().map(|p| *p.primary()),
                background: palette.as_ref().map(|p| *p.background()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Human => {
            println!("{}\n", "Available themes".bright_white().bold());
            for summary in &summaries {
                let swatches = match (&summary.primary, &summary.background) {
                    (Some(primary), Some(background)) => {
                        format!("{}{}", swatch(primary), swatch(background))
                    }
                    _ => "derived".dimmed().to_string(),
                };
                println!(
                    "  {:<8} {:<14} {}",
                    summary.id.key().bright_cyan(),
                    summary.label,
                    swatches
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Css => print!("{}", preset_stylesheet()?),
    }

    Ok(())
}

/// `folio-theme css`
pub fn run_css(args: &ThemeArgs, config: &Config) -> Result<()> {
    let state = startup_state(config, args.theme, args.base);
    let controller = ThemeController::new(StyleTable::new(), state)
        .context("Failed to apply the requested theme")?;

    print!("{}", preset_stylesheet()?);
    println!("/* active: {} */", controller.identifier());
    print!("{}", controller.surface().to_css());
    Ok(())
}

/// `folio-theme config`
pub fn run_config(args: &ConfigArgs) -> Result<()> {
    if args.init {
        let path = Config::ensure_exists()?;
        println!("{} {}", "✓".bright_green(), path.display());
    } else if args.path {
        println!("{}", Config::default_path().display());
    } else {
        print!("{}", generate_sample_config());
    }
    Ok(())
}

/// Two-cell truecolor block for a color
pub fn swatch(color: &ColorValue) -> ColoredString {
    let rgb = color.to_rgb();
    "  ".on_truecolor(rgb.r, rgb.g, rgb.b)
}

/// One line per role: swatch, role key, CSS value
pub fn format_palette(palette: &Palette) -> String {
    palette
        .iter()
        .map(|(role, value)| format!("  {} {:<18} {}\n", swatch(value), role.key(), value))
        .collect()
}
