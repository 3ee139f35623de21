//! Theme controller - owns the active theme state and applies palettes
//!
//! One controller exists per application root. Every mutation runs to
//! completion before returning: resolve, apply to the surface, then notify
//! subscribers once. A failed resolve leaves state, surface and subscribers
//! exactly as they were. Every selectable preset table is a constant checked
//! complete by its own tests, so no `ThemeId` resolves to an incomplete
//! palette; the rejection itself is covered at the `Theme` level.

use tracing::{debug, info, warn};

use crate::color::Rgb;
use crate::error::Result;
use crate::palette::Palette;

use super::surface::StyleSurface;
use super::{Theme, ThemeId, ThemeState};

/// Receives the complete palette after each applied change
pub trait PaletteSubscriber {
    fn palette_changed(&mut self, palette: &Palette);
}

impl<F> PaletteSubscriber for F
where
    F: FnMut(&Palette),
{
    fn palette_changed(&mut self, palette: &Palette) {
        self(palette)
    }
}

/// Single owner of the active `ThemeState`
pub struct ThemeController<S: StyleSurface> {
    state: ThemeState,
    active: Palette,
    surface: S,
    subscribers: Vec<Box<dyn PaletteSubscriber>>,
}

impl<S: StyleSurface> ThemeController<S> {
    /// Create a controller and apply the initial state to the surface
    pub fn new(mut surface: S, initial: ThemeState) -> Result<Self> {
        let theme = initial.theme();
        let palette = theme.resolve()?;
        apply(&mut surface, &theme, &palette);

        info!(theme = %initial.identifier, base = %initial.base_color, "Theme initialized");

        Ok(Self {
            state: initial,
            active: palette,
            surface,
            subscribers: Vec::new(),
        })
    }

    /// Register a subscriber; it is synced with the current palette immediately
    pub fn subscribe<P>(&mut self, mut subscriber: P)
    where
        P: PaletteSubscriber + 'static,
    {
        subscriber.palette_changed(&self.active);
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn identifier(&self) -> ThemeId {
        self.state.identifier
    }

    pub fn base_color(&self) -> Rgb {
        self.state.base_color
    }

    /// The palette currently applied to the surface
    pub fn palette(&self) -> &Palette {
        &self.active
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Switch to another theme
    pub fn set_theme(&mut self, id: ThemeId) -> Result<()> {
        self.transition(ThemeState {
            identifier: id,
            ..self.state
        })
    }

    /// Switch by identifier or selector label
    pub fn select(&mut self, name: &str) -> Result<()> {
        let id = name.parse::<ThemeId>().map_err(|e| {
            warn!("Rejected theme selection: {}", e);
            e
        })?;
        self.set_theme(id)
    }

    /// Store a new base color; it only repaints while `custom` is active
    pub fn set_base_color(&mut self, color: Rgb) -> Result<()> {
        self.transition(ThemeState {
            base_color: color,
            ..self.state
        })
    }

    /// Parse a hex base color and store it
    pub fn set_base_color_hex(&mut self, hex: &str) -> Result<()> {
        let color = Rgb::from_hex(hex).map_err(|e| {
            warn!("Rejected base color: {}", e);
            e
        })?;
        self.set_base_color(color)
    }

    fn transition(&mut self, next: ThemeState) -> Result<()> {
        if next == self.state {
            debug!(theme = %next.identifier, "Theme unchanged, nothing to apply");
            return Ok(());
        }

        // A base color change under a fixed preset has no visible effect yet
        if next.identifier == self.state.identifier && !next.identifier.is_custom() {
            debug!(base = %next.base_color, "Base color stored for later custom use");
            self.state = next;
            return Ok(());
        }

        let theme = next.theme();
        let palette = theme.resolve().map_err(|e| {
            warn!(theme = %next.identifier, "Keeping previous palette: {}", e);
            e
        })?;

        apply(&mut self.surface, &theme, &palette);
        self.state = next;
        self.active = palette;

        info!(theme = %next.identifier, base = %next.base_color, "Theme applied");

        for subscriber in &mut self.subscribers {
            subscriber.palette_changed(&self.active);
        }

        Ok(())
    }
}

fn apply<S: StyleSurface>(surface: &mut S, theme: &Theme, palette: &Palette) {
    match theme {
        Theme::Preset { id, .. } => {
            // Stale custom values must not leak into a fixed theme
            surface.clear_overrides();
            surface.apply_preset(*id, palette);
        }
        Theme::Custom { .. } => surface.apply_custom(palette),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::ThemeError;
    use crate::palette::{generate_palette, Role};
    use crate::theme::StyleTable;

    fn controller() -> ThemeController<StyleTable> {
        ThemeController::new(StyleTable::new(), ThemeState::default()).unwrap()
    }

    fn counter(controller: &mut ThemeController<StyleTable>) -> Rc<RefCell<usize>> {
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);
        controller.subscribe(move |_: &Palette| *sink.borrow_mut() += 1);
        count
    }

    #[test]
    fn test_initial_state_applied() {
        let c = controller();
        assert_eq!(c.identifier(), ThemeId::Dark);
        assert_eq!(c.surface().data_theme(), Some(ThemeId::Dark));
        assert_eq!(c.surface().resolved().unwrap(), *c.palette());
    }

    #[test]
    fn test_set_theme_twice_is_idempotent() {
        let mut c = controller();
        let count = counter(&mut c);

        c.set_theme(ThemeId::Green).unwrap();
        let once = c.palette().clone();
        c.set_theme(ThemeId::Green).unwrap();

        assert_eq!(*c.palette(), once);
        // one sync on subscribe, one for the change
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_custom_round_trip_has_no_leakage() {
        let mut c = controller();
        c.set_base_color_hex("#8b5cf6").unwrap();
        c.set_theme(ThemeId::Custom).unwrap();
        let first = c.surface().resolved().unwrap();

        c.set_theme(ThemeId::Dark).unwrap();
        assert_eq!(c.surface().override_count(), 0);
        assert_eq!(c.surface().lookup(Role::Primary).unwrap().to_string(), "#6366f1");

        c.set_theme(ThemeId::Custom).unwrap();
        assert_eq!(c.surface().resolved().unwrap(), first);
    }

    #[test]
    fn test_base_color_stored_while_preset_active() {
        let mut c = controller();
        let count = counter(&mut c);
        let before = c.palette().clone();

        c.set_base_color(Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(c.base_color(), Rgb::new(255, 0, 0));
        assert_eq!(*c.palette(), before);
        assert_eq!(*count.borrow(), 1);

        c.set_theme(ThemeId::Custom).unwrap();
        assert_eq!(*c.palette(), generate_palette(Rgb::new(255, 0, 0)));
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_base_color_repaints_custom() {
        let mut c = ThemeController::new(
            StyleTable::new(),
            ThemeState::new(ThemeId::Custom, Rgb::new(0, 0, 255)),
        )
        .unwrap();
        c.set_base_color_hex("#0f0").unwrap();
        assert_eq!(c.palette().primary().to_string(), "#00ff00");
        assert_eq!(c.surface().lookup(Role::Primary).unwrap().to_string(), "#00ff00");
    }

    #[test]
    fn test_malformed_color_keeps_state() {
        let mut c = controller();
        c.set_theme(ThemeId::Custom).unwrap();
        let count = counter(&mut c);
        let before = c.state();

        let err = c.set_base_color_hex("#zzz").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColorFormat { .. }));
        assert_eq!(c.state(), before);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let mut c = controller();
        let err = c.select("sepia").unwrap_err();
        assert_eq!(err, ThemeError::UnknownThemeIdentifier("sepia".into()));
        assert_eq!(c.identifier(), ThemeId::Dark);

        c.select("Crimson").unwrap();
        assert_eq!(c.identifier(), ThemeId::Red);
    }
}
