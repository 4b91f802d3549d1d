//! Presentation attributes derived from a [`Theme`].
//!
//! Everything here is a pure function of the theme: one row per theme for the
//! colour palette, plus inline CSS builders for the page container and the toggle
//! button.

use std::fmt;

use serde::Serialize;

use crate::theme::Theme;

/// CSS transition applied to every themed surface.
pub const TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease, border-color 0.3s ease";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
}

impl Palette {
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: "#fff",
                foreground: "#333",
                border: "#333",
            },
            Theme::Dark => Palette {
                background: "#333",
                foreground: "#fff",
                border: "#fff",
            },
        }
    }

    /// Palette for a hovered control.
    pub const fn hover_for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: "#f0f0f0",
                foreground: "#333",
                border: "#333",
            },
            Theme::Dark => Palette {
                background: "#444",
                foreground: "#fff",
                border: "#fff",
            },
        }
    }
}

/// Inline style of the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonStyle {
    pub palette: Palette,
}

impl ButtonStyle {
    pub const fn for_theme(theme: Theme, hovered: bool) -> Self {
        let palette = if hovered {
            Palette::hover_for_theme(theme)
        } else {
            Palette::for_theme(theme)
        };
        Self { palette }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Palette {
            background,
            foreground,
            border,
        } = self.palette;
        write!(
            f,
            "background-color: {background}; color: {foreground}; padding: 10px 20px; \
             border: 2px solid {border}; border-radius: 5px; cursor: pointer; \
             font-size: 16px; transition: {TRANSITION};"
        )
    }
}

/// Inline style of the top-level themed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerStyle {
    pub palette: Palette,
}

impl ContainerStyle {
    pub const fn for_theme(theme: Theme) -> Self {
        Self {
            palette: Palette::for_theme(theme),
        }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContainerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Palette {
            background,
            foreground,
            border,
        } = self.palette;
        write!(
            f,
            "display: flex; justify-content: center; align-items: center; height: 100vh; \
             box-sizing: border-box; font-family: Arial, sans-serif; \
             background-color: {background}; color: {foreground}; \
             border: 2px solid {border}; transition: {TRANSITION};"
        )
    }
}

/// Button copy. Names the theme a click switches to.
pub const fn toggle_label(theme: Theme) -> &'static str {
    match theme.target() {
        Theme::Light => "Toggle to Light Mode",
        Theme::Dark => "Toggle to Dark Mode",
    }
}

pub fn status_label(theme: Theme) -> String {
    format!("Current theme: {theme}")
}

/// Everything a display leaf needs to render one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub theme: Theme,
    pub label: &'static str,
    pub status: String,
    pub container: ContainerStyle,
    pub button: ButtonStyle,
}

impl Presentation {
    pub fn for_theme(theme: Theme) -> Self {
        Self::with_hover(theme, false)
    }

    pub fn with_hover(theme: Theme, hovered: bool) -> Self {
        Self {
            theme,
            label: toggle_label(theme),
            status: status_label(theme),
            container: ContainerStyle::for_theme(theme),
            button: ButtonStyle::for_theme(theme, hovered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_names_target_theme() {
        assert_eq!(toggle_label(Theme::Light), "Toggle to Dark Mode");
        assert_eq!(toggle_label(Theme::Dark), "Toggle to Light Mode");
    }

    #[test]
    fn test_palette_rows() {
        let light = Palette::for_theme(Theme::Light);
        assert_eq!((light.background, light.foreground, light.border), ("#fff", "#333", "#333"));

        let dark = Palette::for_theme(Theme::Dark);
        assert_eq!((dark.background, dark.foreground, dark.border), ("#333", "#fff", "#fff"));
    }

    #[test]
    fn test_palettes_differ_per_theme() {
        assert_ne!(Palette::for_theme(Theme::Light), Palette::for_theme(Theme::Dark));
        for theme in Theme::ALL {
            assert_ne!(Palette::for_theme(theme), Palette::hover_for_theme(theme));
        }
    }

    #[test]
    fn test_button_css() {
        let css = ButtonStyle::for_theme(Theme::Dark, false).css();
        assert!(css.contains("background-color: #333;"));
        assert!(css.contains("color: #fff;"));
        assert!(css.contains("border: 2px solid #fff;"));
        assert!(css.contains("transition: "));

        let hovered = ButtonStyle::for_theme(Theme::Dark, true).css();
        assert!(hovered.contains("background-color: #444;"));
    }

    #[test]
    fn test_container_css() {
        let css = ContainerStyle::for_theme(Theme::Light).css();
        assert!(css.contains("background-color: #fff;"));
        assert!(css.contains("color: #333;"));
        assert!(css.contains("height: 100vh;"));
        assert!(css.contains("border: 2px solid #333;"));

        let dark = ContainerStyle::for_theme(Theme::Dark).css();
        assert!(dark.contains("border: 2px solid #fff;"));
    }

    #[test]
    fn test_presentation_is_deterministic() {
        for theme in Theme::ALL {
            assert_eq!(Presentation::for_theme(theme), Presentation::for_theme(theme));
        }
        let dark = Presentation::for_theme(Theme::Dark);
        assert_eq!(dark.label, "Toggle to Light Mode");
        assert_eq!(dark.status, "Current theme: dark");
        assert_ne!(dark, Presentation::for_theme(Theme::Light));
    }

    #[test]
    fn test_presentation_serializes() {
        let json = serde_json::to_value(Presentation::for_theme(Theme::Light)).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["label"], "Toggle to Dark Mode");
        assert_eq!(json["button"]["palette"]["background"], "#fff");
    }
}
