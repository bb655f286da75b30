use ratatui::style::{Color, Modifier, Style};

use crate::list::{ListStyle, StyleLookup};
use crate::ui::Theme;

/// Concrete styles derived from a [`Theme`], handed to list rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub list_selected_style: Style,
    pub list_active_style: Style,
    pub list_inactive_style: Style,
    pub scrollbar_thumb_style: Style,
    pub scrollbar_track_style: Style,
    pub frame_style: Style,
    pub frame_focused_style: Style,
    pub status_style: Style,
}

impl Colors {
    /// Derive concrete runtime styles from `theme`.
    pub fn from_theme(theme: &Theme) -> Self {
        let tokens = theme.list.clone().unwrap_or_default();

        let selected_bg = tokens.selected_bg.unwrap_or(theme.accent);
        let selected_fg = tokens.selected_fg.unwrap_or(theme.bg);
        let active_bg = tokens.active_bg.unwrap_or(theme.bg);
        let active_fg = tokens.active_fg.unwrap_or(theme.fg);
        let inactive_bg = tokens.inactive_bg.unwrap_or(theme.bg);
        let inactive_fg = tokens.inactive_fg.unwrap_or(Color::DarkGray);
        let thumb = tokens.scrollbar_thumb_bg.unwrap_or(theme.accent);
        let track = tokens.scrollbar_track_bg.unwrap_or(theme.bg);

        Colors {
            list_selected_style: Style::default().fg(selected_fg).bg(selected_bg),
            list_active_style: Style::default().fg(active_fg).bg(active_bg),
            list_inactive_style: Style::default().fg(inactive_fg).bg(inactive_bg),
            scrollbar_thumb_style: Style::default().fg(thumb).bg(track),
            scrollbar_track_style: Style::default().fg(theme.fg).bg(track),
            frame_style: theme.style_fg(),
            frame_focused_style: theme.style_fg().fg(theme.accent).add_modifier(Modifier::BOLD),
            status_style: Style::default().fg(theme.bg).bg(theme.fg),
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors::from_theme(&Theme::dark())
    }
}

impl StyleLookup for Colors {
    fn style(&self, key: ListStyle) -> Style {
        match key {
            ListStyle::Selected => self.list_selected_style,
            ListStyle::Active => self.list_active_style,
            ListStyle::Inactive => self.list_inactive_style,
            ListStyle::ScrollbarTrack => self.scrollbar_track_style,
            ListStyle::ScrollbarThumb => self.scrollbar_thumb_style,
        }
    }
}
