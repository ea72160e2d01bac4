use crate::catalog::Movie;
use crate::store::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Popular,
    Search,
    Favorites,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Popular, Tab::Search, Tab::Favorites];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Popular => "Popular",
            Tab::Search => "Search",
            Tab::Favorites => "Favorites",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Popular => 0,
            Tab::Search => 1,
            Tab::Favorites => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }
}

/// Which screen is shown and where the cursor sits on each list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    pub tab: Tab,
    pub selection: [usize; 3],
    /// Movie whose detail view is open, covering the tab.
    pub detail: Option<Movie>,
    pub confirm_clear: bool,
}

impl UiState for NavState {}

impl NavState {
    pub fn selected(&self) -> usize {
        self.selection[self.tab.index()]
    }

    pub fn in_detail(&self) -> bool {
        self.detail.is_some()
    }
}
