//! Menubuilder Kernel Library
//!
//! Stores hierarchical navigation menus and renders them as nested HTML.
//! The `menubuilder` binary serves rendered menus over HTTP and renders
//! fixture files from the command line.

pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;
