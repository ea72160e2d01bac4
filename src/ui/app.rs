use std::future::Future;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use crate::catalog::{ImageUrls, Movie};
use crate::store::mvi::Reducer;
use crate::store::Stores;
use crate::ui::events::AppEvent;
use crate::ui::nav::{NavIntent, NavReducer, NavState, Tab};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    nav: NavState,
    stores: Stores,
    images: ImageUrls,
    runtime: Handle,
    events: Sender<AppEvent>,
    search_input: String,
    /// Set on every keystroke in the search box, cleared when the
    /// debounced search fires.
    search_edited_at: Option<Instant>,
    search_debounce: Duration,
    notice: Option<String>,
}

impl App {
    pub fn new(
        stores: Stores,
        images: ImageUrls,
        runtime: Handle,
        events: Sender<AppEvent>,
        search_debounce: Duration,
    ) -> Self {
        Self {
            should_quit: false,
            nav: NavState::default(),
            stores,
            images,
            runtime,
            events,
            search_input: String::new(),
            search_edited_at: None,
            search_debounce,
            notice: None,
        }
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    pub fn images(&self) -> &ImageUrls {
        &self.images
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// First screen entry: popular page 1 and the saved favorites.
    pub fn on_start(&mut self) {
        let movies = self.stores.movies.clone();
        self.spawn(async move {
            movies.fetch_first_page().await;
            None
        });
        let favorites = self.stores.favorites.clone();
        self.spawn(async move {
            favorites.load().await;
            None
        });
    }

    pub fn on_tick(&mut self) {
        let Some(edited_at) = self.search_edited_at else {
            return;
        };
        if edited_at.elapsed() < self.search_debounce {
            return;
        }
        self.search_edited_at = None;
        let search = self.stores.search.clone();
        let query = self.search_input.clone();
        self.spawn(async move {
            search.search(&query, 1).await;
            None
        });
    }

    pub fn on_notice(&mut self, message: String) {
        self.notice = Some(message);
    }

    /// Keep cursors valid after a container changed underneath them.
    pub fn on_store_updated(&mut self) {
        let len = self.visible_movies().len();
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Clamp { len });
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.leave_detail();
        dispatch_mvi!(self, nav, NavReducer, NavIntent::SwitchTab(tab));
    }

    pub fn next_tab(&mut self) {
        self.leave_detail();
        dispatch_mvi!(self, nav, NavReducer, NavIntent::NextTab);
    }

    /// Movies on the active tab, in display order.
    pub fn visible_movies(&self) -> Vec<Movie> {
        match self.nav.tab {
            Tab::Popular => self.stores.movies.state().movies,
            Tab::Search => self.stores.search.state().results.movies,
            Tab::Favorites => self.stores.favorites.favorites(),
        }
    }

    pub fn selected_movie(&self) -> Option<Movie> {
        self.visible_movies().into_iter().nth(self.nav.selected())
    }

    /// Move the cursor. Landing on the last row asks for the next page.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_movies().len();
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Move { delta, len });
        if len > 0 && self.nav.selected() + 1 == len {
            self.on_end_reached();
        }
    }

    fn on_end_reached(&mut self) {
        match self.nav.tab {
            Tab::Popular => {
                let movies = self.stores.movies.clone();
                self.spawn(async move {
                    movies.fetch_next_page().await;
                    None
                });
            }
            Tab::Search => {
                let search = self.stores.search.clone();
                self.spawn(async move {
                    search.load_more().await;
                    None
                });
            }
            Tab::Favorites => {}
        }
    }

    pub fn open_selected(&mut self) {
        let Some(movie) = self.selected_movie() else {
            return;
        };
        let detail = self.stores.detail.clone();
        let id = movie.id;
        dispatch_mvi!(self, nav, NavReducer, NavIntent::OpenDetail(movie));
        self.spawn(async move {
            detail.fetch_details(id).await;
            None
        });
    }

    pub fn leave_detail(&mut self) {
        if self.nav.in_detail() {
            self.stores.detail.reset();
            dispatch_mvi!(self, nav, NavReducer, NavIntent::CloseDetail);
        }
    }

    pub fn refresh(&mut self) {
        if self.nav.tab != Tab::Popular {
            return;
        }
        let movies = self.stores.movies.clone();
        self.spawn(async move {
            movies.refresh().await;
            None
        });
    }

    /// Re-issue the request behind the current screen: the open detail,
    /// the current search, or page 1 of the popular list.
    pub fn retry(&mut self) {
        if let Some(movie) = &self.nav.detail {
            let detail = self.stores.detail.clone();
            let id = movie.id;
            self.spawn(async move {
                detail.fetch_details(id).await;
                None
            });
            return;
        }
        match self.nav.tab {
            Tab::Popular => self.refresh(),
            Tab::Search => {
                self.search_edited_at = None;
                let search = self.stores.search.clone();
                let query = self.search_input.clone();
                self.spawn(async move {
                    search.search(&query, 1).await;
                    None
                });
            }
            Tab::Favorites => {}
        }
    }

    /// Favorite button: the open detail's movie, otherwise the selected row.
    pub fn toggle_favorite(&mut self) {
        let movie = match &self.nav.detail {
            Some(movie) => Some(
                self.stores
                    .detail
                    .state()
                    .movie
                    .map(|detail| detail.summary())
                    .unwrap_or_else(|| movie.clone()),
            ),
            None => self.selected_movie(),
        };
        let Some(movie) = movie else {
            return;
        };
        let favorites = self.stores.favorites.clone();
        self.spawn(async move {
            if favorites.toggle(movie).await {
                None
            } else {
                Some("Failed to save favorites".to_string())
            }
        });
    }

    pub fn remove_selected_favorite(&mut self) {
        if self.nav.tab != Tab::Favorites || self.nav.in_detail() {
            return;
        }
        let Some(movie) = self.selected_movie() else {
            return;
        };
        let favorites = self.stores.favorites.clone();
        self.spawn(async move {
            if favorites.remove(movie.id).await {
                None
            } else {
                Some("Failed to remove favorite".to_string())
            }
        });
    }

    pub fn ask_clear_favorites(&mut self) {
        if self.nav.tab == Tab::Favorites && !self.stores.favorites.favorites().is_empty() {
            dispatch_mvi!(self, nav, NavReducer, NavIntent::AskClear);
        }
    }

    pub fn confirm_clear(&mut self, confirmed: bool) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::DismissConfirm);
        if !confirmed {
            return;
        }
        let favorites = self.stores.favorites.clone();
        self.spawn(async move {
            if favorites.clear().await {
                None
            } else {
                Some("Failed to clear favorites".to_string())
            }
        });
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_input.push(ch);
        self.on_search_edited();
    }

    pub fn pop_search_char(&mut self) {
        if self.search_input.pop().is_some() {
            self.on_search_edited();
        }
    }

    /// Esc on the search tab: empty box, no results.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.search_edited_at = None;
        self.stores.search.clear();
    }

    fn on_search_edited(&mut self) {
        self.notice = None;
        self.stores.search.set_query(self.search_input.clone());
        self.search_edited_at = Some(Instant::now());
    }

    /// Run a container operation on the runtime. A returned message is
    /// shown in the footer; either way the UI is told to redraw.
    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Option<String>> + Send + 'static,
    {
        self.notice = None;
        let events = self.events.clone();
        self.runtime.spawn(async move {
            if let Some(message) = task.await {
                let _ = events.send(AppEvent::Notice(message));
            }
            let _ = events.send(AppEvent::StoreUpdated);
        });
    }
}
