//! Drawing of page text and chrome on top of the background scene.

use folio_core::{Palette, Section, ViewAttrs};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
};

use crate::content::{ContentLine, LineKind, PageContent};
use crate::sections::DocumentLayout;

/// Columns reserved on the right for the navigation rail.
const NAV_WIDTH: u16 = 16;

/// Clickable regions from the last drawn frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub nav: Vec<(Rect, Section)>,
    pub theme_toggle: Rect,
}

impl HitMap {
    /// What lies under the cell `(col, row)`.
    pub fn hit(&self, col: u16, row: u16) -> Option<Hit> {
        let contains = |r: &Rect| {
            col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
        };
        if contains(&self.theme_toggle) {
            return Some(Hit::ThemeToggle);
        }
        self.nav
            .iter()
            .find(|(rect, _)| contains(rect))
            .map(|(_, section)| Hit::Nav(*section))
    }
}

/// A clickable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Nav(Section),
    ThemeToggle,
}

fn line_style(kind: LineKind, palette: &Palette) -> Style {
    match kind {
        LineKind::Title => Style::new()
            .fg(palette.text.color())
            .add_modifier(Modifier::BOLD),
        LineKind::Body => Style::new().fg(palette.text.color()),
        LineKind::Muted | LineKind::Blank => Style::new().fg(palette.muted.color()),
        LineKind::Accent => Style::new().fg(palette.accent.color()),
    }
}

/// First content row of a section, centering its lines vertically.
fn content_top(section_top: f32, section_height: f32, rows: usize) -> f32 {
    section_top + ((section_height - rows as f32) / 2.0).max(0.0).floor()
}

/// Draw the visible part of every section's text.
pub fn render_content(
    frame: &mut Frame,
    area: Rect,
    layout: &DocumentLayout,
    content: &PageContent,
    scroll: f32,
    view: &ViewAttrs,
) {
    let left = (area.width / 10).max(2);
    let max_width = area.width.saturating_sub(left + NAV_WIDTH);
    if max_width == 0 {
        return;
    }
    let scroll = scroll.round();

    for span in layout.spans() {
        let lines: &[ContentLine] = content.lines(span.section);
        let top = content_top(span.top, span.height, lines.len());
        for (i, line) in lines.iter().enumerate() {
            let row = top + i as f32 - scroll;
            if row < 0.0 || row >= area.height as f32 || line.text.is_empty() {
                continue;
            }
            let styled = Line::styled(line.text.as_str(), line_style(line.kind, &view.palette));
            let width = (styled.width() as u16).min(max_width);
            let rect = Rect::new(area.x + left, area.y + row as u16, width, 1);
            frame.render_widget(styled, rect);
        }
    }
}

/// Draw the navigation rail and return the clickable rows.
pub fn render_nav(frame: &mut Frame, area: Rect, view: &ViewAttrs) -> Vec<(Rect, Section)> {
    let items = view.nav.len() as u16;
    let spacing = 2;
    let total = items * spacing;
    if area.width < NAV_WIDTH || area.height < total {
        return Vec::new();
    }

    let x = area.x + area.width - NAV_WIDTH;
    let y0 = area.y + (area.height - total) / 2;
    view.nav
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = match item.marker {
                Some(style) => Span::styled(" ●", style),
                None => Span::styled(" ─", Style::new().fg(view.palette.border.color())),
            };
            let label = format!("{:>10}", item.section.label().to_uppercase());
            let line = Line::from(vec![Span::styled(label, item.label), marker]);
            let rect = Rect::new(x, y0 + i as u16 * spacing, NAV_WIDTH - 2, 1);
            frame.render_widget(line, rect);
            (rect, item.section)
        })
        .collect()
}

/// Draw the handle, theme toggle, toast and key help. Returns the toggle's area.
pub fn render_chrome(frame: &mut Frame, area: Rect, view: &ViewAttrs, is_dark: bool) -> Rect {
    let muted = view.palette.muted.color();
    let text = view.palette.text.color();

    if area.width > 12 && area.height > 2 {
        frame.render_widget(
            Line::styled("@folio", Style::new().fg(muted)),
            Rect::new(area.x + 2, area.y + 1, 6, 1),
        );
    }

    let toggle = if area.width > 8 && area.height > 2 {
        let icon = if is_dark { "[☀]" } else { "[☾]" };
        let rect = Rect::new(area.x + area.width - 6, area.y + 1, 3, 1);
        frame.render_widget(Line::styled(icon, Style::new().fg(text)), rect);
        rect
    } else {
        Rect::default()
    };

    if view.toast_visible {
        let toast = Line::from(vec![
            Span::styled("● ", Style::new().fg(view.palette.accent.color())),
            Span::styled("Copied to clipboard", Style::new().fg(text)),
        ]);
        let width = (toast.width() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        frame.render_widget(toast, Rect::new(x, area.y + 1, width, 1));
    }

    if area.height > 3 {
        let accent = view.palette.accent.color();
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".fg(muted),
            "t".bold().fg(accent),
            " theme  ".fg(muted),
            "1-4".bold().fg(accent),
            " jump  ".fg(muted),
            "y".bold().fg(accent),
            " copy  ".fg(muted),
            "b".bold().fg(accent),
            " background".fg(muted),
        ])
        .centered();
        frame.render_widget(help, Rect::new(area.x, area.y + area.height - 1, area.width, 1));
    }

    toggle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_top_centers() {
        assert_eq!(content_top(20.0, 20.0, 6), 27.0);
        assert_eq!(content_top(0.0, 4.0, 10), 0.0);
    }

    #[test]
    fn test_hit_map() {
        let hits = HitMap {
            nav: vec![
                (Rect::new(60, 10, 14, 1), Section::Home),
                (Rect::new(60, 12, 14, 1), Section::Skills),
            ],
            theme_toggle: Rect::new(74, 1, 3, 1),
        };
        assert_eq!(hits.hit(65, 12), Some(Hit::Nav(Section::Skills)));
        assert_eq!(hits.hit(75, 1), Some(Hit::ThemeToggle));
        assert_eq!(hits.hit(65, 11), None);
        assert_eq!(hits.hit(0, 0), None);
    }
}
