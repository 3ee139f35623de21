//! Theme module - Identifiers, theme resolution and the controller
//!
//! Resolution is a single function over a tagged variant: a fixed preset
//! resolves its declared table, a custom theme derives from its base color.

pub mod controller;
pub mod surface;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::color::Rgb;
use crate::error::{Result, ThemeError};
use crate::palette::presets::{self, PresetTable};
use crate::palette::{generate_palette, Palette};

pub use controller::{PaletteSubscriber, ThemeController};
pub use surface::{StyleSurface, StyleTable};

/// Base color used for `custom` until the user picks one
pub const DEFAULT_BASE_COLOR: Rgb = Rgb::new(0x7e, 0x3a, 0xf2);

/// Which palette-resolution strategy is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Dark,
    Light,
    Glass,
    Purple,
    Red,
    Green,
    Blue,
    Custom,
}

impl ThemeId {
    pub const ALL: [ThemeId; 8] = [
        ThemeId::Dark,
        ThemeId::Light,
        ThemeId::Glass,
        ThemeId::Purple,
        ThemeId::Red,
        ThemeId::Green,
        ThemeId::Blue,
        ThemeId::Custom,
    ];

    /// Every identifier with a pre-declared palette
    pub const PRESETS: [ThemeId; 7] = [
        ThemeId::Dark,
        ThemeId::Light,
        ThemeId::Glass,
        ThemeId::Purple,
        ThemeId::Red,
        ThemeId::Green,
        ThemeId::Blue,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
            ThemeId::Glass => "glass",
            ThemeId::Purple => "purple",
            ThemeId::Red => "red",
            ThemeId::Green => "green",
            ThemeId::Blue => "blue",
            ThemeId::Custom => "custom",
        }
    }

    /// Human-readable label for the theme selector
    pub fn label(&self) -> &'static str {
        match self {
            ThemeId::Dark => "Dark",
            ThemeId::Light => "Light",
            ThemeId::Glass => "Glass",
            ThemeId::Purple => "Purple Haze",
            ThemeId::Red => "Crimson",
            ThemeId::Green => "Emerald",
            ThemeId::Blue => "Ocean Blue",
            ThemeId::Custom => "Custom Color",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ThemeId::Custom)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    /// Accepts an identifier (`purple`) or a selector label (`Purple Haze`)
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ThemeId::ALL
            .iter()
            .copied()
            .find(|id| id.key().eq_ignore_ascii_case(wanted) || id.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ThemeError::UnknownThemeIdentifier(s.to_string()))
    }
}

/// A theme ready for resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    Preset { id: ThemeId, table: PresetTable },
    Custom { base: Rgb },
}

impl Theme {
    pub fn id(&self) -> ThemeId {
        match self {
            Theme::Preset { id, .. } => *id,
            Theme::Custom { .. } => ThemeId::Custom,
        }
    }

    /// Resolve to a complete palette
    pub fn resolve(&self) -> Result<Palette> {
        match self {
            Theme::Preset { id, table } => Palette::from_css_table(id.key(), table),
            Theme::Custom { base } => Ok(generate_palette(*base)),
        }
    }
}

/// The single active theme selection of a running application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeState {
    pub identifier: ThemeId,
    pub base_color: Rgb,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            identifier: ThemeId::Dark,
            base_color: DEFAULT_BASE_COLOR,
        }
    }
}

impl ThemeState {
    pub fn new(identifier: ThemeId, base_color: Rgb) -> Self {
        Self {
            identifier,
            base_color,
        }
    }

    /// The theme this state selects
    pub fn theme(&self) -> Theme {
        match presets::preset_table(self.identifier) {
            Some(table) => Theme::Preset {
                id: self.identifier,
                table,
            },
            None => Theme::Custom {
                base: self.base_color,
            },
        }
    }
}

/// Resolve the palette for a theme
pub fn resolve(theme: &Theme) -> Result<Palette> {
    theme.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Role;

    #[test]
    fn test_default_state() {
        let state = ThemeState::default();
        assert_eq!(state.identifier, ThemeId::Dark);
        assert_eq!(state.base_color.to_hex(), "#7e3af2");
    }

    #[test]
    fn test_parse_identifiers_and_labels() {
        assert_eq!("purple".parse::<ThemeId>().unwrap(), ThemeId::Purple);
        assert_eq!("CUSTOM".parse::<ThemeId>().unwrap(), ThemeId::Custom);
        assert_eq!("Ocean Blue".parse::<ThemeId>().unwrap(), ThemeId::Blue);
        assert_eq!(
            "neon".parse::<ThemeId>().unwrap_err(),
            ThemeError::UnknownThemeIdentifier("neon".into())
        );
    }

    #[test]
    fn test_state_selects_variant() {
        let state = ThemeState::new(ThemeId::Glass, DEFAULT_BASE_COLOR);
        assert!(matches!(state.theme(), Theme::Preset { id: ThemeId::Glass, .. }));

        let state = ThemeState::new(ThemeId::Custom, Rgb::new(1, 2, 3));
        assert_eq!(state.theme(), Theme::Custom { base: Rgb::new(1, 2, 3) });
    }

    #[test]
    fn test_resolve_custom_uses_base_color() {
        let theme = Theme::Custom {
            base: Rgb::new(0x8b, 0x5c, 0xf6),
        };
        let palette = resolve(&theme).unwrap();
        assert_eq!(palette.get(Role::Primary).to_string(), "#8b5cf6");
    }

    #[test]
    fn test_resolve_preset_ignores_base_color() {
        let a = ThemeState::new(ThemeId::Red, Rgb::new(0, 0, 0)).theme().resolve().unwrap();
        let b = ThemeState::new(ThemeId::Red, Rgb::new(255, 255, 255)).theme().resolve().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_rejects_incomplete_table() {
        static PARTIAL: &[(&str, &str)] = &[("primary", "#6366f1"), ("background", "#0f172a")];
        let theme = Theme::Preset {
            id: ThemeId::Dark,
            table: PARTIAL,
        };

        match theme.resolve().unwrap_err() {
            ThemeError::IncompletePalette { theme, detail } => {
                assert_eq!(theme, "dark");
                assert!(detail.contains("primary-hover"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_every_identifier_resolves() {
        for id in ThemeId::ALL {
            let state = ThemeState::new(id, DEFAULT_BASE_COLOR);
            assert!(state.theme().resolve().is_ok(), "{id}");
        }
    }
}
