pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod logging;
pub mod storage;
pub mod store;
pub mod ui;
