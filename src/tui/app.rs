//! App state - Central state management for the TUI

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::animation::AnimationHandle;
use crate::config::Config;
use crate::theme::{StyleTable, ThemeController, ThemeId, ThemeState};

/// Input phases of the switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Moving through the theme list
    Browse,
    /// Typing a custom base color
    ColorInput,
}

/// Main application state
pub struct App {
    /// Current input phase
    pub state: AppState,
    /// Should the app quit
    pub should_quit: bool,
    /// Show the key help line
    pub show_help: bool,
    /// Theme controller driving the style table
    pub controller: ThemeController<StyleTable>,
    /// Uniforms of the fluid strip
    pub animation: AnimationHandle,
    /// Highlighted entry in the theme list
    pub cursor: usize,
    /// Custom color input buffer
    pub input: String,
    /// Status bar message
    pub status_message: String,
    started: Instant,
}

impl App {
    /// Create the app with its controller and animation subscriber
    pub fn new(initial: ThemeState, config: &Config) -> Result<Self> {
        let mut controller = ThemeController::new(StyleTable::new(), initial)?;
        let animation = AnimationHandle::with_rotation_step(config.animation.rotation_step);
        controller.subscribe(animation.clone());

        let cursor = ThemeId::ALL
            .iter()
            .position(|id| *id == initial.identifier)
            .unwrap_or(0);

        Ok(Self {
            state: AppState::Browse,
            should_quit: false,
            show_help: config.tui.show_help,
            controller,
            animation,
            cursor,
            input: initial.base_color.to_hex(),
            status_message: "Press '?' to toggle help".to_string(),
            started: Instant::now(),
        })
    }

    /// Theme under the cursor
    pub fn highlighted(&self) -> ThemeId {
        ThemeId::ALL[self.cursor]
    }

    /// The color input is only offered while `custom` is active
    pub fn color_input_visible(&self) -> bool {
        self.controller.identifier().is_custom()
    }

    /// Advance the animation one frame
    pub fn on_tick(&mut self) {
        self.animation.tick(self.started.elapsed());
    }

    /// Global key handler
    pub fn on_key(&mut self, key: KeyEvent) {
        match self.state {
            AppState::Browse => self.handle_browse_key(key),
            AppState::ColorInput => self.handle_input_key(key),
        }
    }

    /// Key handler for the theme list
    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('g') | KeyCode::Home => self.cursor = 0,
            KeyCode::Char('G') | KeyCode::End => self.cursor = ThemeId::ALL.len() - 1,

            KeyCode::Char(' ') | KeyCode::Enter => self.apply_highlighted(),

            KeyCode::Char('e') | KeyCode::Char('c') => {
                if self.color_input_visible() {
                    self.input = self.controller.base_color().to_hex();
                    self.state = AppState::ColorInput;
                    self.status_message = "Type a hex color, Enter to apply, Esc to cancel".to_string();
                } else {
                    self.status_message = "Select 'Custom Color' first".to_string();
                }
            }

            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = !self.show_help,

            _ => {}
        }
    }

    /// Key handler for the custom color input
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let text = self.input.clone();
                match self.controller.set_base_color_hex(&text) {
                    Ok(()) => {
                        self.state = AppState::Browse;
                        self.status_message = format!("Base color set to {}", self.controller.base_color());
                    }
                    Err(e) => self.status_message = e.to_string(),
                }
            }
            KeyCode::Esc => {
                self.state = AppState::Browse;
                self.input = self.controller.base_color().to_hex();
                self.status_message = "Color input cancelled".to_string();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if c == '#' || c.is_ascii_hexdigit() => {
                if self.input.len() < 7 {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    fn select_prev(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(ThemeId::ALL.len() - 1);
    }

    fn select_next(&mut self) {
        self.cursor = (self.cursor + 1) % ThemeId::ALL.len();
    }

    fn apply_highlighted(&mut self) {
        let id = self.highlighted();
        match self.controller.set_theme(id) {
            Ok(()) if id.is_custom() => {
                self.status_message = format!("{} active, press 'e' to edit the base color", id.label());
            }
            Ok(()) => self.status_message = format!("{} active", id.label()),
            Err(e) => self.status_message = e.to_string(),
        }
    }
}
