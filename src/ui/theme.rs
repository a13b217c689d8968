use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// An RGB color.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            accent: ColorSpec::rgb(255, 109, 146),        // Pink
            banner: ColorSpec::rgb(255, 109, 146),        // Pink
            text: ColorSpec::rgb(88, 82, 96),             // Text
            text_muted: ColorSpec::rgb(152, 147, 165),    // Muted
            error: ColorSpec::rgb(235, 111, 146),         // Love
            border_active: ColorSpec::rgb(161, 119, 255), // Purple
            border_normal: ColorSpec::rgb(88, 82, 96),    // Text
            highlight_bg: ColorSpec::rgb(61, 174, 233),   // Foam
            highlight_fg: ColorSpec::rgb(0, 0, 0),        // Black
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            accent: ColorSpec::rgb(255, 121, 198),        // Pink
            banner: ColorSpec::rgb(255, 121, 198),        // Pink
            text: ColorSpec::rgb(248, 248, 242),          // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),     // Comment
            error: ColorSpec::rgb(255, 85, 85),           // Red
            border_active: ColorSpec::rgb(189, 147, 249), // Purple
            border_normal: ColorSpec::rgb(98, 114, 164),  // Comment
            highlight_bg: ColorSpec::rgb(139, 233, 253),  // Cyan
            highlight_fg: ColorSpec::rgb(40, 42, 54),     // Background
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            accent: ColorSpec::rgb(255, 159, 196),        // Magenta
            banner: ColorSpec::rgb(255, 159, 196),        // Magenta
            text: ColorSpec::rgb(169, 177, 214),          // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),    // Comment
            error: ColorSpec::rgb(247, 118, 142),         // Red
            border_active: ColorSpec::rgb(125, 207, 255), // Blue
            border_normal: ColorSpec::rgb(117, 121, 148), // Comment
            highlight_bg: ColorSpec::rgb(125, 207, 255),  // Blue
            highlight_fg: ColorSpec::rgb(26, 27, 38),     // Background
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
            "tokyo-night".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("neon").is_none());
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(ColorSpec::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
