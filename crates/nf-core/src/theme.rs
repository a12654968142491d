//! Theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
    Nature,
    Ocean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme id: {0}")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Light,
        Theme::Dark,
        Theme::Sepia,
        Theme::Nature,
        Theme::Ocean,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
            Theme::Nature => "nature",
            Theme::Ocean => "ocean",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Sepia => "Sepia",
            Theme::Nature => "Nature",
            Theme::Ocean => "Ocean",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#FFFFFF",
                text: "#1A1A1A",
                primary: "#007AFF",
                secondary: "#5856D6",
            },
            Theme::Dark => Palette {
                background: "#1A1A1A",
                text: "#FFFFFF",
                primary: "#0A84FF",
                secondary: "#5E5CE6",
            },
            Theme::Sepia => Palette {
                background: "#F4ECD8",
                text: "#5C4B37",
                primary: "#8B7355",
                secondary: "#A67F59",
            },
            Theme::Nature => Palette {
                background: "#F5F7F4",
                text: "#2C4A3E",
                primary: "#4A7862",
                secondary: "#729B79",
            },
            Theme::Ocean => Palette {
                background: "#F0F5F9",
                text: "#1E2832",
                primary: "#406E8E",
                secondary: "#2C88D9",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .iter()
            .copied()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for theme in Theme::ALL {
            assert_eq!(theme.id().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn unknown_id_is_an_error() {
        assert_eq!(
            "neon".parse::<Theme>(),
            Err(UnknownTheme("neon".to_string()))
        );
    }

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }
}
