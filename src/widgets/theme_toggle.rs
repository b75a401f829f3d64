/// Light/dark switch shown next to the healthbar.
///
/// Holds only the dark-mode flag. The host screen swaps its theme when the
/// flag flips; the switch has no effect on the slider value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeToggle {
    dark: bool,
}

impl ThemeToggle {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// Build from a theme name ("dark"/"light"); unknown names fall back to dark
    pub fn from_theme_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::new(false),
            "dark" => Self::new(true),
            other => {
                tracing::warn!("Unknown theme '{}', falling back to dark", other);
                Self::new(true)
            }
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the switch and return the new dark-mode state
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        tracing::info!("Theme switched to {}", self.theme_name());
        self.dark
    }

    pub fn theme_name(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut toggle = ThemeToggle::new(false);
        assert!(toggle.toggle());
        assert_eq!(toggle.theme_name(), "dark");
        assert!(!toggle.toggle());
        assert_eq!(toggle.theme_name(), "light");
    }

    #[test]
    fn test_from_theme_name() {
        assert!(ThemeToggle::from_theme_name("dark").is_dark());
        assert!(!ThemeToggle::from_theme_name(" Light ").is_dark());
        assert!(ThemeToggle::from_theme_name("solarized").is_dark());
    }
}
