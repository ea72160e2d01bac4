use crate::ui::nav::Tab;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Tab strip: `  cinedex  │  1 Popular  │  2 Search  │  3 Favorites (4)`
pub struct Header {
    active: Tab,
    favorites: usize,
}

impl Header {
    pub fn new(active: Tab, favorites: usize) -> Self {
        Self { active, favorites }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("cinedex", active_style),
        ];
        for tab in Tab::ALL {
            spans.push(Span::styled("  │  ", separator_style));
            let mut label = format!("{} {}", tab.index() + 1, tab.title());
            if tab == Tab::Favorites && self.favorites > 0 {
                label.push_str(&format!(" ({})", self.favorites));
            }
            let style = if tab == self.active {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(label, style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
