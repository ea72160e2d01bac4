//! Screen navigation: active tab, per-list cursors, open detail, prompts.

mod intent;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{NavState, Tab};
