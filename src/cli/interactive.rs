//! Interactive Mode - prompt-driven theme selection
//!
//! Offers a list of theme labels, asks for a hex base color only when
//! `custom` is chosen, then prints the applied palette.

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::animation::AnimationHandle;
use crate::cli::commands::{format_palette, startup_state, swatch};
use crate::cli::PickArgs;
use crate::color::{ColorValue, Rgb};
use crate::config::Config;
use crate::theme::{StyleTable, ThemeController, ThemeId};

/// Run the picker until the user stops
pub fn run_picker(args: &PickArgs, config: &Config) -> Result<()> {
    let term = Term::stdout();
    term.clear_screen()?;

    println!("{}\n", "🎨 Folio Theme - pick a palette".bright_cyan().bold());

    let state = startup_state(config, None, args.base);
    let mut controller = ThemeController::new(StyleTable::new(), state)?;
    let animation = AnimationHandle::with_rotation_step(config.animation.rotation_step);
    controller.subscribe(animation.clone());

    loop {
        let labels: Vec<&str> = ThemeId::ALL.iter().map(|id| id.label()).collect();
        let current = ThemeId::ALL
            .iter()
            .position(|id| *id == controller.identifier())
            .unwrap_or(0);

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Theme")
            .items(&labels)
            .default(current)
            .interact_on(&term)?;
        let id = ThemeId::ALL[choice];

        if id.is_custom() {
            let base: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Base color (hex)")
                .with_initial_text(controller.base_color().to_hex())
                .validate_with(|input: &String| -> Result<(), String> {
                    Rgb::from_hex(input).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text_on(&term)?;

            if let Err(e) = controller.set_base_color_hex(&base) {
                println!("{} {}", "✗".bright_red(), e);
                continue;
            }
        }

        if let Err(e) = controller.set_theme(id) {
            println!("{} {}", "✗".bright_red(), e);
            continue;
        }

        let (color_a, color_b) = animation.colors();
        println!(
            "\n{} {} {}\n",
            "✓".bright_green(),
            controller.identifier().label().bright_white().bold(),
            format!(
                "animation {}{}",
                swatch(&ColorValue::Rgb(color_a)),
                swatch(&ColorValue::Rgb(color_b))
            )
            .dimmed()
        );
        print!("{}", format_palette(controller.palette()));

        let again = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Pick another theme?")
            .default(true)
            .interact_on(&term)?;
        if !again {
            break;
        }
    }

    println!("\n{}", controller.surface().to_css());
    Ok(())
}
