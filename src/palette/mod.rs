//! Palette module - Semantic color roles and custom palette derivation
//!
//! A `Palette` always carries a value for every `Role`. Partial tables are
//! rejected when they are built, so a palette that exists can be applied
//! atomically.

pub mod presets;

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::color::{ColorValue, Hsl, Rgb};
use crate::error::{Result, ThemeError};

/// Text color used on light `primary` backgrounds
pub const DARK_TEXT: Rgb = Rgb::new(0x11, 0x18, 0x27);
/// Text color used on dark `primary` backgrounds
pub const LIGHT_TEXT: Rgb = Rgb::new(0xf9, 0xfa, 0xfb);

/// Alpha of `primary-light`
const PRIMARY_LIGHT_ALPHA: f64 = 0.2;
/// Alpha of the translucent chrome roles (header, sidebar)
const TRANSLUCENT_ALPHA: f64 = 0.8;

/// Named semantic purpose of a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Primary,
    PrimaryHover,
    PrimaryText,
    PrimaryTextAlt,
    PrimaryLight,
    Background,
    TextPrimary,
    TextSecondary,
    UiHeader,
    UiHeaderAccent,
    UiCard,
    UiCardHover,
    UiCardDeep,
    UiSidebar,
    UiBorder,
    UiButton,
}

impl Role {
    pub const COUNT: usize = 16;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Primary,
        Role::PrimaryHover,
        Role::PrimaryText,
        Role::PrimaryTextAlt,
        Role::PrimaryLight,
        Role::Background,
        Role::TextPrimary,
        Role::TextSecondary,
        Role::UiHeader,
        Role::UiHeaderAccent,
        Role::UiCard,
        Role::UiCardHover,
        Role::UiCardDeep,
        Role::UiSidebar,
        Role::UiBorder,
        Role::UiButton,
    ];

    /// Stable key, e.g. `primary-hover`
    pub fn key(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::PrimaryHover => "primary-hover",
            Role::PrimaryText => "primary-text",
            Role::PrimaryTextAlt => "primary-text-alt",
            Role::PrimaryLight => "primary-light",
            Role::Background => "background",
            Role::TextPrimary => "text-primary",
            Role::TextSecondary => "text-secondary",
            Role::UiHeader => "ui-header",
            Role::UiHeaderAccent => "ui-header-accent",
            Role::UiCard => "ui-card",
            Role::UiCardHover => "ui-card-hover",
            Role::UiCardDeep => "ui-card-deep",
            Role::UiSidebar => "ui-sidebar",
            Role::UiBorder => "ui-border",
            Role::UiButton => "ui-button",
        }
    }

    /// CSS custom property name, e.g. `--primary-hover`
    pub fn css_var(&self) -> String {
        format!("--{}", self.key())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().trim_start_matches("--");
        Role::ALL.iter().copied().find(|role| role.key() == key)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete mapping from every `Role` to a color value
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    values: [ColorValue; Role::COUNT],
}

impl Palette {
    /// Build a palette from role/value pairs, rejecting any missing role
    ///
    /// Later entries for the same role replace earlier ones.
    pub fn from_entries<I>(theme: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Role, ColorValue)>,
    {
        let mut slots: [Option<ColorValue>; Role::COUNT] = [None; Role::COUNT];
        for (role, value) in entries {
            slots[role.index()] = Some(value);
        }

        // Slots are indexed by role, so a full set is already in declaration order
        let present: Vec<ColorValue> = slots.iter().flatten().copied().collect();
        match <[ColorValue; Role::COUNT]>::try_from(present) {
            Ok(values) => Ok(Self { values }),
            Err(_) => {
                let missing: Vec<&str> = Role::ALL
                    .iter()
                    .filter(|role| slots[role.index()].is_none())
                    .map(Role::key)
                    .collect();
                Err(ThemeError::IncompletePalette {
                    theme: theme.to_string(),
                    detail: format!("missing roles: {}", missing.join(", ")),
                })
            }
        }
    }

    /// Build a palette from a table of `(role key, CSS color)` strings
    ///
    /// An unknown key or an unparseable value makes the table unresolvable.
    pub fn from_css_table(theme: &str, table: &[(&str, &str)]) -> Result<Self> {
        let mut entries = Vec::with_capacity(table.len());
        for (key, value) in table {
            let role = Role::from_key(key).ok_or_else(|| ThemeError::IncompletePalette {
                theme: theme.to_string(),
                detail: format!("unknown role '{key}'"),
            })?;
            let color = ColorValue::parse(value).map_err(|_| ThemeError::IncompletePalette {
                theme: theme.to_string(),
                detail: format!("role '{key}' has unresolvable value '{value}'"),
            })?;
            entries.push((role, color));
        }
        Self::from_entries(theme, entries)
    }

    pub fn get(&self, role: Role) -> &ColorValue {
        &self.values[role.index()]
    }

    pub fn primary(&self) -> &ColorValue {
        self.get(Role::Primary)
    }

    pub fn background(&self) -> &ColorValue {
        self.get(Role::Background)
    }

    /// Iterate roles in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Role, &ColorValue)> {
        Role::ALL.iter().copied().zip(self.values.iter())
    }

    /// `(custom property, value)` pairs ready for a stylesheet
    pub fn css_vars(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(role, value)| (role.css_var(), value.to_string()))
            .collect()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for (role, value) in self.iter() {
            map.serialize_entry(role.key(), value)?;
        }
        map.end()
    }
}

/// Derive a full palette from a single base color
///
/// Pure and deterministic. Derived saturation/lightness values are clamped
/// to `[0, 100]` by `Hsl::new`.
pub fn generate_palette(base: Rgb) -> Palette {
    let Hsl { h, s, l, .. } = base.to_hsl();
    let muted = s - 10.0;

    let primary_text = if base.is_light() { DARK_TEXT } else { LIGHT_TEXT };
    let text_alt_lightness = if l > 50.0 { l - 40.0 } else { l + 40.0 };

    let neutral = |lightness: f64| ColorValue::Hsl(Hsl::new(h, muted, lightness));
    let translucent =
        |lightness: f64| ColorValue::Hsl(Hsl::new(h, muted, lightness).with_alpha(TRANSLUCENT_ALPHA));

    let values = [
        ColorValue::Rgb(base),
        ColorValue::Hsl(Hsl::new(h, s, l - 5.0)),
        ColorValue::Rgb(primary_text),
        ColorValue::Hsl(Hsl::new(h, s, text_alt_lightness)),
        ColorValue::Hsl(Hsl::new(h, s, l).with_alpha(PRIMARY_LIGHT_ALPHA)),
        neutral(10.0),
        ColorValue::Hsl(Hsl::new(h, 15.0, 95.0)),
        ColorValue::Hsl(Hsl::new(h, 10.0, 70.0)),
        translucent(10.0),
        neutral(15.0),
        neutral(15.0),
        neutral(20.0),
        neutral(8.0),
        translucent(15.0),
        neutral(20.0),
        neutral(20.0),
    ];

    Palette { values }
}

/// Parse a hex base color and derive its palette
pub fn generate_palette_hex(base: &str) -> Result<Palette> {
    let rgb = Rgb::from_hex(base)?;
    Ok(generate_palette(rgb))
}
