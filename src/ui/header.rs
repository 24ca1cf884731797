use crate::ui::app::SliderStatus;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, HERO_ACCENT, STATUS_OK, STATUS_PAUSED,
    STATUS_STOPPED,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Values shown in the header bar.
pub struct HeaderInfo<'a> {
    pub title: &'a str,
    pub status: SliderStatus,
    pub position: Option<(usize, usize)>,
    pub interval_ms: u64,
}

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, info: HeaderInfo<'_>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_text, status_color) = match info.status {
            SliderStatus::Unbound => ("○ Waiting", HEADER_SEPARATOR),
            SliderStatus::Stopped => ("■ Stopped", STATUS_STOPPED),
            SliderStatus::Paused => ("❚❚ Paused", STATUS_PAUSED),
            SliderStatus::Playing => ("▶ Playing", STATUS_OK),
        };
        let position = match info.position {
            Some((index, len)) => format!("{}/{}", index + 1, len),
            None => "-/-".to_string(),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                info.title.to_string(),
                Style::default().fg(HERO_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status_text, Style::default().fg(status_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(position, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("every {} ms", info.interval_ms), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
