//! Rendering surface contract and the custom-property style table

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::color::ColorValue;
use crate::error::Result;
use crate::palette::{Palette, Role};

use super::ThemeId;

/// Anything that styles itself from palette roles
///
/// The controller only hands over complete palettes; implementations must
/// replace every role in one call.
pub trait StyleSurface {
    /// Install a preset palette as the declared layer and tag the surface with its id
    fn apply_preset(&mut self, id: ThemeId, palette: &Palette);

    /// Write every role of a derived palette as an inline override
    fn apply_custom(&mut self, palette: &Palette);

    /// Drop all inline overrides
    fn clear_overrides(&mut self);

    /// Effective value of a role, if the surface has one
    fn lookup(&self, role: Role) -> Option<ColorValue>;
}

/// In-process model of a document root's CSS custom properties
///
/// Inline overrides win over the declared (stylesheet) layer, the same
/// precedence a browser gives `style=""` over `:root[data-theme]` rules.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    data_theme: Option<ThemeId>,
    declared: Option<Palette>,
    inline: BTreeMap<Role, ColorValue>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `data-theme` attribute
    pub fn data_theme(&self) -> Option<ThemeId> {
        self.data_theme
    }

    pub fn override_count(&self) -> usize {
        self.inline.len()
    }

    /// Snapshot of every effective role value
    pub fn resolved(&self) -> Result<Palette> {
        let theme = self.data_theme.map(|id| id.key()).unwrap_or("unset");
        Palette::from_entries(
            theme,
            Role::ALL
                .iter()
                .filter_map(|role| self.lookup(*role).map(|value| (*role, value))),
        )
    }

    /// Render the effective state as a CSS rule
    pub fn to_css(&self) -> String {
        let selector = match self.data_theme {
            Some(id) => format!(":root[data-theme=\"{id}\"]"),
            None => ":root".to_string(),
        };

        let mut css = format!("{selector} {{\n");
        for role in Role::ALL {
            if let Some(value) = self.lookup(role) {
                let _ = writeln!(css, "  {}: {};", role.css_var(), value);
            }
        }
        css.push_str("}\n");
        css
    }
}

impl StyleSurface for StyleTable {
    fn apply_preset(&mut self, id: ThemeId, palette: &Palette) {
        self.data_theme = Some(id);
        self.declared = Some(palette.clone());
    }

    fn apply_custom(&mut self, palette: &Palette) {
        self.data_theme = Some(ThemeId::Custom);
        self.inline = palette.iter().map(|(role, value)| (role, *value)).collect();
    }

    fn clear_overrides(&mut self) {
        self.inline.clear();
    }

    fn lookup(&self, role: Role) -> Option<ColorValue> {
        self.inline
            .get(&role)
            .copied()
            .or_else(|| self.declared.as_ref().map(|p| *p.get(role)))
    }
}

/// Render one `selector { --role: value; }` block
pub fn css_block(selector: &str, palette: &Palette) -> String {
    let mut css = format!("{selector} {{\n");
    for (name, value) in palette.css_vars() {
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n");
    css
}

/// Stylesheet with one `[data-theme]` block per preset
pub fn preset_stylesheet() -> Result<String> {
    let mut css = String::new();
    for id in ThemeId::PRESETS {
        let palette = super::ThemeState::new(id, super::DEFAULT_BASE_COLOR)
            .theme()
            .resolve()?;
        css.push_str(&css_block(&format!(":root[data-theme=\"{id}\"]"), &palette));
        css.push('\n');
    }
    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::presets::preset_palette;
    use crate::palette::generate_palette_hex;

    #[test]
    fn test_empty_table_has_no_values() {
        let table = StyleTable::new();
        assert!(table.lookup(Role::Primary).is_none());
        assert!(table.resolved().is_err());
    }

    #[test]
    fn test_inline_overrides_win() {
        let mut table = StyleTable::new();
        let dark = preset_palette(ThemeId::Dark).unwrap();
        let custom = generate_palette_hex("#ff8800").unwrap();

        table.apply_preset(ThemeId::Dark, &dark);
        table.apply_custom(&custom);

        assert_eq!(table.data_theme(), Some(ThemeId::Custom));
        assert_eq!(table.override_count(), Role::COUNT);
        assert_eq!(table.resolved().unwrap(), custom);

        table.clear_overrides();
        assert_eq!(table.resolved().unwrap(), dark);
    }

    #[test]
    fn test_to_css_lists_every_role() {
        let mut table = StyleTable::new();
        table.apply_preset(ThemeId::Blue, &preset_palette(ThemeId::Blue).unwrap());

        let css = table.to_css();
        assert!(css.starts_with(":root[data-theme=\"blue\"] {"));
        assert!(css.contains("  --primary: #3b82f6;"));
        assert_eq!(css.matches(';').count(), Role::COUNT);
    }

    #[test]
    fn test_preset_stylesheet_has_all_presets() {
        let css = preset_stylesheet().unwrap();
        for id in ThemeId::PRESETS {
            assert!(css.contains(&format!("[data-theme=\"{id}\"]")), "{id}");
        }
        assert!(!css.contains("custom"));
    }
}
