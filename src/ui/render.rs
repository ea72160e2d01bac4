use crate::catalog::Movie;
use crate::cli::{format_movie_line, release_year};
use crate::store::{DetailState, PageState};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, search_regions};
use crate::ui::nav::Tab;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    POPUP_BORDER, STATUS_ERROR,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let nav = app.nav();
    let favorites = app.stores().favorites.state();

    frame.render_widget(
        Header::new(nav.tab, favorites.favorites.len()).widget(),
        header,
    );
    frame.render_widget(Clear, body);

    if nav.in_detail() {
        draw_detail(frame, app, body);
    } else {
        match nav.tab {
            Tab::Popular => {
                let state = app.stores().movies.state();
                let status = page_status(&state, "Loading popular movies...");
                draw_movie_list(frame, app, body, "Popular", &state.movies, status);
            }
            Tab::Search => draw_search(frame, app, body),
            Tab::Favorites => {
                let status = if !favorites.initialized || favorites.loading {
                    Some(Status::Info("Loading favorites...".to_string()))
                } else if favorites.favorites.is_empty() {
                    Some(Status::Info(
                        "No favorites yet. Press f on a movie to add it.".to_string(),
                    ))
                } else {
                    None
                };
                draw_movie_list(frame, app, body, "Favorites", &favorites.favorites, status);
            }
        }
    }

    let footer_widget = Footer::new(nav, app.notice());
    frame.render_widget(footer_widget.widget(footer), footer);

    if nav.confirm_clear {
        draw_confirm_clear(frame, favorites.favorites.len());
    }
}

enum Status {
    Info(String),
    Error(String),
}

impl Status {
    fn line(&self) -> Line<'static> {
        match self {
            Status::Info(text) => Line::styled(
                format!(" {}", text),
                Style::default().fg(HEADER_SEPARATOR),
            ),
            Status::Error(text) => {
                Line::styled(format!(" {}", text), Style::default().fg(STATUS_ERROR))
            }
        }
    }
}

fn page_status(state: &PageState, loading: &str) -> Option<Status> {
    if let Some(error) = &state.error {
        return Some(Status::Error(error.clone()));
    }
    if state.refreshing {
        return Some(Status::Info("Refreshing...".to_string()));
    }
    if state.loading {
        return Some(Status::Info(if state.is_empty() {
            loading.to_string()
        } else {
            "Loading more...".to_string()
        }));
    }
    if !state.has_more && !state.is_empty() {
        return Some(Status::Info("End of list".to_string()));
    }
    None
}

fn draw_movie_list(
    frame: &mut Frame<'_>,
    app: &App,
    area: Rect,
    title: &str,
    movies: &[Movie],
    status: Option<Status>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status_height = u16::from(status.is_some()).min(inner.height);
    let list_area = Rect {
        height: inner.height.saturating_sub(status_height),
        ..inner
    };

    let favorites = &app.stores().favorites;
    let items: Vec<ListItem> = movies
        .iter()
        .map(|movie| {
            let marker = if favorites.is_favorite(movie.id) {
                Span::styled("★ ", Style::default().fg(FAVORITE))
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(format_movie_line(movie), Style::default().fg(HEADER_TEXT)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    let mut state = ListState::default();
    if !movies.is_empty() {
        state.select(Some(app.nav().selected().min(movies.len() - 1)));
    }
    frame.render_stateful_widget(list, list_area, &mut state);

    if let Some(status) = status {
        let status_area = Rect {
            y: list_area.y + list_area.height,
            height: status_height,
            ..inner
        };
        frame.render_widget(Paragraph::new(status.line()), status_area);
    }
}

fn draw_search(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let (input_area, results_area) = search_regions(body);
    let input = Paragraph::new(Line::from(vec![
        Span::styled(app.search_input().to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled("▏", Style::default().fg(ACCENT)),
    ]))
    .block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(input, input_area);

    let state = app.stores().search.state();
    let status = match page_status(&state.results, "Searching...") {
        Some(status) => Some(status),
        None if state.query.trim().is_empty() => {
            Some(Status::Info("Type a title to search the catalog.".to_string()))
        }
        None if state.has_searched && state.results.is_empty() => Some(Status::Info(format!(
            "No results for \"{}\"",
            state.query.trim()
        ))),
        None => None,
    };
    draw_movie_list(frame, app, results_area, "Results", &state.results.movies, status);
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.stores().detail.state();
    let fallback = app.nav().detail.as_ref();
    let title = state
        .movie
        .as_ref()
        .map(|detail| detail.movie.title.clone())
        .or_else(|| fallback.map(|movie| movie.title.clone()))
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let lines = detail_lines(app, &state);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn detail_lines(app: &App, state: &DetailState) -> Vec<Line<'static>> {
    let label = Style::default().fg(HEADER_SEPARATOR);
    let text = Style::default().fg(HEADER_TEXT);

    if state.loading {
        return vec![Status::Info("Loading details...".to_string()).line()];
    }
    if let Some(error) = &state.error {
        return vec![Status::Error(error.clone()).line()];
    }
    let Some(detail) = &state.movie else {
        return Vec::new();
    };
    let movie = &detail.movie;

    let mut lines = Vec::new();
    let mut heading = vec![Span::styled(
        movie.title.clone(),
        text.add_modifier(Modifier::BOLD),
    )];
    if let Some(year) = release_year(&movie.release_date) {
        heading.push(Span::styled(format!(" ({})", year), label));
    }
    if app.stores().favorites.is_favorite(movie.id) {
        heading.push(Span::styled("  ★ Favorite", Style::default().fg(FAVORITE)));
    }
    lines.push(Line::from(heading));

    if !detail.tagline.is_empty() {
        lines.push(Line::styled(
            detail.tagline.clone(),
            text.add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::raw(""));

    let mut facts = vec![format!(
        "★ {:.1} ({} votes)",
        movie.vote_average, movie.vote_count
    )];
    if let Some(runtime) = detail.runtime.filter(|minutes| *minutes > 0) {
        facts.push(format!("{}h {}m", runtime / 60, runtime % 60));
    }
    if !detail.status.is_empty() {
        facts.push(detail.status.clone());
    }
    lines.push(Line::styled(facts.join("  ·  "), text));

    let genres: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
    if !genres.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Genres: ", label),
            Span::styled(genres.join(", "), text),
        ]));
    }
    if detail.budget > 0 {
        lines.push(Line::from(vec![
            Span::styled("Budget: ", label),
            Span::styled(format!("${}", detail.budget), text),
        ]));
    }
    if detail.revenue > 0 {
        lines.push(Line::from(vec![
            Span::styled("Revenue: ", label),
            Span::styled(format!("${}", detail.revenue), text),
        ]));
    }
    if let Some(url) = app.images().poster_url(movie.poster_path.as_deref()) {
        lines.push(Line::from(vec![
            Span::styled("Poster: ", label),
            Span::styled(url, text),
        ]));
    }
    if let Some(url) = app.images().backdrop_url(movie.backdrop_path.as_deref()) {
        lines.push(Line::from(vec![
            Span::styled("Backdrop: ", label),
            Span::styled(url, text),
        ]));
    }

    if !movie.overview.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(movie.overview.clone(), text));
    }

    if !state.cast.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Cast", label.add_modifier(Modifier::BOLD)));
        for member in &state.cast {
            let mut spans = vec![Span::styled(format!("  {}", member.name), text)];
            if !member.character.is_empty() {
                spans.push(Span::styled(format!(" as {}", member.character), label));
            }
            lines.push(Line::from(spans));
        }
    }

    lines
}

fn draw_confirm_clear(frame: &mut Frame<'_>, count: usize) {
    let area = centered_rect_by_size(44, 5, frame.area());
    frame.render_widget(Clear, area);
    let text = vec![
        Line::styled(
            format!(" Remove all {} favorites?", count),
            Style::default().fg(HEADER_TEXT),
        ),
        Line::raw(""),
        Line::styled(" y: Yes    any other key: No", Style::default().fg(HEADER_SEPARATOR)),
    ];
    let popup = Paragraph::new(text).block(
        Block::default()
            .title(" Clear favorites ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(popup, area);
}
