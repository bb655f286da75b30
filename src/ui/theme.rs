use ratatui::style::{Color, Style};
use serde::Deserialize;

use crate::errors::ListError;

/// Base palette plus optional per-list overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub list: Option<ListTokens>,
}

/// Optional list colours. Anything left unset falls back to the palette.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListTokens {
    pub selected_bg: Option<Color>,
    pub selected_fg: Option<Color>,
    pub active_bg: Option<Color>,
    pub active_fg: Option<Color>,
    pub inactive_bg: Option<Color>,
    pub inactive_fg: Option<Color>,
    pub scrollbar_thumb_bg: Option<Color>,
    pub scrollbar_track_bg: Option<Color>,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
}

#[derive(Deserialize, Default)]
struct RawTokens {
    selected_bg: Option<String>,
    selected_fg: Option<String>,
    active_bg: Option<String>,
    active_fg: Option<String>,
    inactive_bg: Option<String>,
    inactive_fg: Option<String>,
    scrollbar_thumb_bg: Option<String>,
    scrollbar_track_bg: Option<String>,
}

#[derive(Deserialize)]
struct RawTheme {
    palette: Option<Pal>,
    list: Option<RawTokens>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
            list: None,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            list: None,
        }
    }

    /// Built-in theme by name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    pub fn style_fg(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Parse a theme file. A missing `palette` means the dark palette.
    pub fn from_toml(s: &str) -> Result<Self, ListError> {
        let raw: RawTheme = toml::from_str(s)?;
        let mut theme = match raw.palette {
            Some(p) => Self {
                bg: parse_hex(&p.bg)?,
                fg: parse_hex(&p.fg)?,
                accent: parse_hex(&p.accent)?,
                list: None,
            },
            None => Self::dark(),
        };
        if let Some(t) = raw.list {
            let opt = |v: &Option<String>| v.as_deref().map(parse_hex).transpose();
            theme.list = Some(ListTokens {
                selected_bg: opt(&t.selected_bg)?,
                selected_fg: opt(&t.selected_fg)?,
                active_bg: opt(&t.active_bg)?,
                active_fg: opt(&t.active_fg)?,
                inactive_bg: opt(&t.inactive_bg)?,
                inactive_fg: opt(&t.inactive_fg)?,
                scrollbar_thumb_bg: opt(&t.scrollbar_thumb_bg)?,
                scrollbar_track_bg: opt(&t.scrollbar_track_bg)?,
            });
        }
        Ok(theme)
    }
}

/// Parse `#rrggbb` (the `#` is optional).
pub fn parse_hex(s: &str) -> Result<Color, ListError> {
    let hex = s.trim().trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
    };
    match (hex.len(), channel(0), channel(2), channel(4)) {
        (6, Some(r), Some(g), Some(b)) => Ok(Color::Rgb(r, g, b)),
        _ => Err(ListError::Config(format!("invalid colour `{}`", s))),
    }
}
