use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body and footer rows. Header and footer are three rows each
/// when the terminal is tall enough.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3.min(area.height)),
            Constraint::Min(0),
            Constraint::Length(3.min(area.height.saturating_sub(3))),
        ])
        .areas(area);
    (header, body, footer)
}

/// Search box on top, results below.
pub fn search_regions(body: Rect) -> (Rect, Rect) {
    let [input, results] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3.min(body.height)), Constraint::Min(0)])
        .areas(body);
    (input, results)
}

/// Fixed-size rectangle centered in `area`, clamped to fit.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
