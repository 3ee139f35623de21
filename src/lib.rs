//! Folio Theme Library
//!
//! Runtime theme and palette engine for the portfolio shell: derives a full
//! semantic palette from a single base color, switches between preset and
//! custom themes, and pushes the result to the page chrome and the fluid
//! animation.
//!
//! # Features
//!
//! - **Palette Generator**: pure HSL derivation of 16 semantic roles
//! - **Contrast Rule**: binary brightness threshold for text on `primary`
//! - **Theme Controller**: atomic palette replacement with one notification per change
//! - **Style Table**: CSS custom properties with declared and inline layers
//!
//! # Example
//!
//! ```
//! use folio_theme::animation::AnimationHandle;
//! use folio_theme::theme::{StyleTable, ThemeController, ThemeId, ThemeState};
//!
//! fn main() -> Result<(), folio_theme::ThemeError> {
//!     let mut controller = ThemeController::new(StyleTable::new(), ThemeState::default())?;
//!
//!     let animation = AnimationHandle::new();
//!     controller.subscribe(animation.clone());
//!
//!     controller.set_base_color_hex("#8b5cf6")?;
//!     controller.set_theme(ThemeId::Custom)?;
//!
//!     println!("{}", controller.surface().to_css());
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod palette;
pub mod theme;
pub mod tui;

// Re-export commonly used types
pub use animation::{AnimationHandle, FluidUniforms};
pub use color::{ColorValue, Hsl, Rgb};
pub use config::Config;
pub use error::ThemeError;
pub use palette::{generate_palette, generate_palette_hex, Palette, Role};
pub use theme::{
    resolve, PaletteSubscriber, StyleSurface, StyleTable, Theme, ThemeController, ThemeId,
    ThemeState,
};
