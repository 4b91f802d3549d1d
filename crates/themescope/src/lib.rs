//! Shared theme state for nested UI components.
//!
//! A single light/dark [`theme::Theme`] lives in one [`store::ThemeStore`] per scope and is
//! read and toggled by any component nested inside that scope, without the layers in
//! between forwarding it. The [`scope`] module models the scope tree explicitly, the
//! [`style`] module derives what a display component renders, and the frontend crate
//! wires the same store into Yew's context providers.

pub mod errors;
pub mod log;
pub mod macros;
pub mod scope;
pub mod store;
pub mod style;
pub mod theme;

pub use scope::{Mutator, Scope, ThemeView};
pub use store::{Subscription, ThemeStore};
pub use theme::Theme;

pub use serde;
pub use tracing;
