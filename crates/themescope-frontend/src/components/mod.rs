//! Reusable UI components for the themescope frontend.
//!
//! Contains the themed page layout and the toggle button that reads the
//! ambient theme.

pub mod layout;
pub mod themed_button;

pub use layout::*;
pub use themed_button::*;
