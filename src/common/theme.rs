use std::fmt;
use std::str::FromStr;

use colored::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 优先使用系统解析出的主题，其次是用户设置，都没有时为浅色
    pub fn resolve(resolved: Option<Theme>, preferred: Option<Theme>) -> Theme {
        resolved.or(preferred).unwrap_or_default()
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// 终端里的强调色
    pub fn accent(self) -> Color {
        match self {
            Theme::Light => Color::Blue,
            Theme::Dark => Color::BrightCyan,
        }
    }

    pub fn muted(self) -> Color {
        match self {
            Theme::Light => Color::BrightBlack,
            Theme::Dark => Color::White,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("未知的主题: {}", other)),
        }
    }
}
