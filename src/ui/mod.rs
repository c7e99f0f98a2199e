//! UI components

pub mod search_bar;
pub mod theme;
