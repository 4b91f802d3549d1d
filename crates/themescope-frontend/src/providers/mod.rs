//! Context providers for shared application state.

pub mod theme;

pub use theme::{ThemeContext, ThemeProvider, use_theme, use_theme_checked};
