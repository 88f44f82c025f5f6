#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Color theme, mirrored onto the `data-theme` attribute of `<html>`.
///
/// The stylesheet owns the default appearance; this value only exists once
/// the user has an explicit preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute / storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Anything other than `"dark"`
    /// (including garbage) is treated as light, so a toggle from an
    /// unrecognized state lands on dark.
    pub fn parse(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    /// The opposite theme. Applying this twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle control for the current theme.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}
