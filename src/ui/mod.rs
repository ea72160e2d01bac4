//! Interactive terminal UI: three tabbed lists plus a detail view, each
//! rendered from container snapshots.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod nav;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
