//! Pre-declared palettes for the fixed themes
//!
//! Tables are CSS color strings, parsed on resolve by the same parser used
//! for stylesheet values.

use super::Palette;
use crate::error::{Result, ThemeError};
use crate::theme::ThemeId;

pub type PresetTable = &'static [(&'static str, &'static str)];

const DARK: PresetTable = &[
    ("primary", "#6366f1"),
    ("primary-hover", "#4f46e5"),
    ("primary-text", "#ffffff"),
    ("primary-text-alt", "#c7d2fe"),
    ("primary-light", "rgba(99, 102, 241, 0.2)"),
    ("background", "#111827"),
    ("text-primary", "#f9fafb"),
    ("text-secondary", "#9ca3af"),
    ("ui-header", "rgba(31, 41, 55, 0.8)"),
    ("ui-header-accent", "#1f2937"),
    ("ui-card", "#1f2937"),
    ("ui-card-hover", "#374151"),
    ("ui-card-deep", "#0b1120"),
    ("ui-sidebar", "rgba(31, 41, 55, 0.8)"),
    ("ui-border", "#374151"),
    ("ui-button", "#374151"),
];

const LIGHT: PresetTable = &[
    ("primary", "#4f46e5"),
    ("primary-hover", "#4338ca"),
    ("primary-text", "#ffffff"),
    ("primary-text-alt", "#312e81"),
    ("primary-light", "rgba(79, 70, 229, 0.2)"),
    ("background", "#f9fafb"),
    ("text-primary", "#111827"),
    ("text-secondary", "#4b5563"),
    ("ui-header", "rgba(255, 255, 255, 0.8)"),
    ("ui-header-accent", "#f3f4f6"),
    ("ui-card", "#ffffff"),
    ("ui-card-hover", "#f3f4f6"),
    ("ui-card-deep", "#e5e7eb"),
    ("ui-sidebar", "rgba(255, 255, 255, 0.9)"),
    ("ui-border", "#e5e7eb"),
    ("ui-button", "#e5e7eb"),
];

const GLASS: PresetTable = &[
    ("primary", "#38bdf8"),
    ("primary-hover", "#0ea5e9"),
    ("primary-text", "#0f172a"),
    ("primary-text-alt", "#e0f2fe"),
    ("primary-light", "rgba(56, 189, 248, 0.2)"),
    ("background", "#0f172a"),
    ("text-primary", "#f8fafc"),
    ("text-secondary", "#cbd5e1"),
    ("ui-header", "rgba(255, 255, 255, 0.08)"),
    ("ui-header-accent", "rgba(255, 255, 255, 0.12)"),
    ("ui-card", "rgba(255, 255, 255, 0.06)"),
    ("ui-card-hover", "rgba(255, 255, 255, 0.12)"),
    ("ui-card-deep", "rgba(15, 23, 42, 0.6)"),
    ("ui-sidebar", "rgba(255, 255, 255, 0.05)"),
    ("ui-border", "rgba(255, 255, 255, 0.18)"),
    ("ui-button", "rgba(255, 255, 255, 0.1)"),
];

const PURPLE: PresetTable = &[
    ("primary", "#7e3af2"),
    ("primary-hover", "#6c2bd9"),
    ("primary-text", "#ffffff"),
    ("primary-text-alt", "#ddd6fe"),
    ("primary-light", "rgba(126, 58, 242, 0.2)"),
    ("background", "#13111c"),
    ("text-primary", "#f5f3ff"),
    ("text-secondary", "#a79fc1"),
    ("ui-header", "rgba(30, 24, 48, 0.8)"),
    ("ui-header-accent", "#241c38"),
    ("ui-card", "#1e1830"),
    ("ui-card-hover", "#2a2142"),
    ("ui-card-deep", "#0e0b16"),
    ("ui-sidebar", "rgba(30, 24, 48, 0.8)"),
    ("ui-border", "#2f2548"),
    ("ui-button", "#2f2548"),
];

const RED: PresetTable = &[
    ("primary", "#ef4444"),
    ("primary-hover", "#dc2626"),
    ("primary-text", "#ffffff"),
    ("primary-text-alt", "#fecaca"),
    ("primary-light", "rgba(239, 68, 68, 0.2)"),
    ("background", "#1a0f0f"),
    ("text-primary", "#fef2f2"),
    ("text-secondary", "#c4a1a1"),
    ("ui-header", "rgba(42, 20, 20, 0.8)"),
    ("ui-header-accent", "#2d1616"),
    ("ui-card", "#2a1515"),
    ("ui-card-hover", "#3a1c1c"),
    ("ui-card-deep", "#120909"),
    ("ui-sidebar", "rgba(42, 20, 20, 0.8)"),
    ("ui-border", "#4a2323"),
    ("ui-button", "#4a2323"),
];

const GREEN: PresetTable = &[
    ("primary", "#22c55e"),
    ("primary-hover", "#16a34a"),
    ("primary-text", "#052e16"),
    ("primary-text-alt", "#bbf7d0"),
    ("primary-light", "rgba(34, 197, 94, 0.2)"),
    ("background", "#0c1a12"),
    ("text-primary", "#f0fdf4"),
    ("text-secondary", "#9fc2ac"),
    ("ui-header", "rgba(18, 40, 27, 0.8)"),
    ("ui-header-accent", "#142a1d"),
    ("ui-card", "#13271b"),
    ("ui-card-hover", "#1b3726"),
    ("ui-card-deep", "#08110c"),
    ("ui-sidebar", "rgba(18, 40, 27, 0.8)"),
    ("ui-border", "#234631"),
    ("ui-button", "#234631"),
];

const BLUE: PresetTable = &[
    ("primary", "#3b82f6"),
    ("primary-hover", "#2563eb"),
    ("primary-text", "#ffffff"),
    ("primary-text-alt", "#bfdbfe"),
    ("primary-light", "rgba(59, 130, 246, 0.2)"),
    ("background", "#0c1424"),
    ("text-primary", "#eff6ff"),
    ("text-secondary", "#9fb3d1"),
    ("ui-header", "rgba(17, 30, 54, 0.8)"),
    ("ui-header-accent", "#15233f"),
    ("ui-card", "#132038"),
    ("ui-card-hover", "#1a2b4b"),
    ("ui-card-deep", "#080e1a"),
    ("ui-sidebar", "rgba(17, 30, 54, 0.8)"),
    ("ui-border", "#22365c"),
    ("ui-button", "#22365c"),
];

/// The declared table for a fixed theme; `None` for `custom`
pub fn preset_table(id: ThemeId) -> Option<PresetTable> {
    match id {
        ThemeId::Dark => Some(DARK),
        ThemeId::Light => Some(LIGHT),
        ThemeId::Glass => Some(GLASS),
        ThemeId::Purple => Some(PURPLE),
        ThemeId::Red => Some(RED),
        ThemeId::Green => Some(GREEN),
        ThemeId::Blue => Some(BLUE),
        ThemeId::Custom => None,
    }
}

/// Resolve the declared palette of a fixed theme
pub fn preset_palette(id: ThemeId) -> Result<Palette> {
    let table = preset_table(id).ok_or_else(|| ThemeError::IncompletePalette {
        theme: id.key().to_string(),
        detail: "no declared palette; derived from the base color".to_string(),
    })?;
    Palette::from_css_table(id.key(), table)
}
