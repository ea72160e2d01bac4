use crate::ui::nav::{NavState, Tab};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the current screen, or a notice in their place.
pub struct Footer<'a> {
    nav: &'a NavState,
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(nav: &'a NavState, notice: Option<&'a str>) -> Self {
        Self { nav, notice }
    }

    pub fn hints(&self) -> &'static str {
        if self.nav.confirm_clear {
            return " y: Confirm │ any key: Cancel";
        }
        if self.nav.in_detail() {
            return " r: Retry │ f: Favorite │ Esc: Back │ q: Quit";
        }
        match self.nav.tab {
            Tab::Popular => " ↑↓: Move │ Enter: Open │ r: Refresh │ f: Favorite │ Tab: Switch │ q: Quit",
            Tab::Search => " Type to search │ ↑↓: Move │ Enter: Open │ Ctrl+R: Retry │ Esc: Clear │ Tab: Switch │ Ctrl+C: Quit",
            Tab::Favorites => " ↑↓: Move │ Enter: Open │ d: Remove │ C: Clear all │ Tab: Switch │ q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (text, text_style) = match self.notice {
            Some(notice) => (
                format!(" {}", notice),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (
                self.hints().to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain box-drawing glyphs.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(
                version,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
