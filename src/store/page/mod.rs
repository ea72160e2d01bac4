//! Paginated list state shared by the popular and search lists.

mod intent;
mod reducer;
mod state;

pub use intent::{LoadMode, PageIntent};
pub use reducer::PageReducer;
pub use state::PageState;
