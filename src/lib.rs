//! slidein: animated slide-in search bar for iced
//!
//! The bar shows a centered magnifier and placeholder while idle and slides
//! into a left-aligned editing layout when focused, optionally revealing a
//! cancel control. See [`ui::search_bar::SearchBar`].

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

pub use config::{AppConfig, SearchBarConfig};
pub use error::{Error, Result};
pub use ui::search_bar::SearchBar;
