//! TUI rendering with ratatui
//!
//! Every color on screen is read back from the style table, so the
//! switcher repaints itself with whatever palette is active.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::{App, AppState};
use crate::color::ColorValue;
use crate::palette::Role;
use crate::theme::{StyleSurface, ThemeId};

/// Convert a palette value to a terminal color (alpha dropped)
pub fn term_color(value: &ColorValue) -> Color {
    let rgb = value.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Effective color of a role, falling back to the terminal default
fn role_color(app: &App, role: Role) -> Color {
    app.controller
        .surface()
        .lookup(role)
        .map(|v| term_color(&v))
        .unwrap_or(Color::Reset)
}

/// Render the whole switcher
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let background = Block::default().style(
        Style::default()
            .bg(role_color(app, Role::Background))
            .fg(role_color(app, Role::TextPrimary)),
    );
    frame.render_widget(background, area);

    let input_height = if app.color_input_visible() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(8),               // Selector + swatches
            Constraint::Length(5),            // Fluid strip
            Constraint::Length(input_height), // Custom color input
            Constraint::Length(3),            // Status bar
        ])
        .split(area);

    draw_header(frame, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(chunks[1]);

    draw_selector(frame, body[0], app);
    draw_swatches(frame, body[1], app);
    draw_fluid(frame, chunks[2], app);

    if app.color_input_visible() {
        draw_color_input(frame, chunks[3], app);
    }

    draw_status_bar(frame, chunks[4], app);
}

fn panel<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(role_color(app, Role::UiBorder)))
        .style(Style::default().bg(role_color(app, Role::UiCard)))
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let id = app.controller.identifier();
    let line = Line::from(vec![
        Span::styled(
            " Folio Theme ",
            Style::default()
                .fg(role_color(app, Role::PrimaryText))
                .bg(role_color(app, Role::Primary))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            id.label(),
            Style::default()
                .fg(role_color(app, Role::TextPrimary))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  base {}", app.controller.base_color()),
            Style::default().fg(role_color(app, Role::TextSecondary)),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(role_color(app, Role::UiBorder)))
            .style(Style::default().bg(role_color(app, Role::UiHeaderAccent))),
    );
    frame.render_widget(header, area);
}

fn draw_selector(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.controller.identifier();

    let items: Vec<ListItem> = ThemeId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let marker = if *id == active { "● " } else { "  " };
            let style = if i == app.cursor {
                Style::default()
                    .fg(role_color(app, Role::PrimaryText))
                    .bg(role_color(app, Role::PrimaryHover))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(role_color(app, Role::TextPrimary))
            };
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, id.label()), style)))
        })
        .collect();

    let list = List::new(items).block(panel(app, " Themes "));
    frame.render_widget(list, area);
}

fn draw_swatches(frame: &mut Frame, area: Rect, app: &App) {
    let surface = app.controller.surface();

    let lines: Vec<Line> = Role::ALL
        .iter()
        .filter_map(|role| surface.lookup(*role).map(|value| (*role, value)))
        .map(|(role, value)| {
            Line::from(vec![
                Span::styled("    ", Style::default().bg(term_color(&value))),
                Span::styled(
                    format!(" {:<18}", role.key()),
                    Style::default().fg(role_color(app, Role::TextPrimary)),
                ),
                Span::styled(
                    value.to_string(),
                    Style::default().fg(role_color(app, Role::TextSecondary)),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(panel(app, " Palette "));
    frame.render_widget(paragraph, area);
}

/// Fluid strip: one cell per column/row sampled from the animation uniforms
fn draw_fluid(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel(app, " Fluid ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let uniforms = app.animation.snapshot();
    let lines: Vec<Line> = (0..inner.height)
        .map(|row| {
            let v = (f32::from(row) / f32::from(inner.height.max(2) - 1)) * 2.0 - 1.0;
            let spans: Vec<Span> = (0..inner.width)
                .map(|col| {
                    let u = (f32::from(col) / f32::from(inner.width.max(2) - 1)) * 2.0 - 1.0;
                    let rgb = uniforms.sample(u, v);
                    Span::styled(" ", Style::default().bg(Color::Rgb(rgb.r, rgb.g, rgb.b)))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_color_input(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if app.state == AppState::ColorInput {
        (
            format!("{}_", app.input),
            Style::default().fg(role_color(app, Role::Primary)),
        )
    } else {
        (
            format!("{}  (press 'e' to edit)", app.controller.base_color()),
            Style::default().fg(role_color(app, Role::TextSecondary)),
        )
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(panel(app, " Base color "));
    frame.render_widget(input, area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.status_message),
        Style::default().fg(role_color(app, Role::TextPrimary)),
    )];

    if app.show_help {
        spans.push(Span::styled(
            " j/k move · Enter apply · e edit color · ? help · q quit",
            Style::default().fg(role_color(app, Role::TextSecondary)),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(role_color(app, Role::UiBorder)))
            .style(Style::default().bg(role_color(app, Role::UiSidebar))),
    );
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::theme::ThemeState;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_draw_renders_labels() {
        let app = App::new(ThemeState::default(), &Config::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Folio Theme"));
        assert!(text.contains("Purple Haze"));
        assert!(text.contains("ui-card-deep"));
        assert!(!text.contains("Base color"));
    }

    #[test]
    fn test_term_color_drops_alpha() {
        let value = ColorValue::parse("rgba(10, 20, 30, 0.5)").unwrap();
        assert_eq!(term_color(&value), Color::Rgb(10, 20, 30));
    }
}
