use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, HERO_ACCENT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const FULL_HINTS: &str =
    " n: Next │ 1-9: Go to │ p/r: Pause/Resume │ Space: Start │ s: Stop │ +/-: Interval │ d/i: Destroy/Init │ q: Quit";
const SHORT_HINTS: &str = " n │ 1-9 │ p/r │ Space │ s │ +/- │ d/i │ q";

/// Slider behaviour flags shown on the right of the footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterInfo {
    pub pause_on_hover: bool,
    pub reduced_motion: bool,
    pub hovered: bool,
}

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, info: FooterInfo) -> Paragraph<'static> {
        Paragraph::new(footer_line(area.width.saturating_sub(2) as usize, info)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

/// Key hints on the left, behaviour flags and version on the right.
///
/// Falls back to the short hint set when the full one does not fit.
fn footer_line(inner_width: usize, info: FooterInfo) -> Line<'static> {
    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let flags = flag_spans(info);
    let version = format!(" v{VERSION} ");

    let right_width = flags.iter().map(Span::width).sum::<usize>() + version.chars().count();
    let hints = if FULL_HINTS.chars().count() + right_width <= inner_width {
        FULL_HINTS
    } else {
        SHORT_HINTS
    };
    let padding = inner_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(right_width);

    let mut spans = vec![Span::styled(hints, dim), Span::raw(" ".repeat(padding))];
    spans.extend(flags);
    spans.push(Span::styled(version, dim));
    Line::from(spans)
}

fn flag_spans(info: FooterInfo) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if info.pause_on_hover {
        let style = if info.hovered {
            Style::default().fg(HERO_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_SEPARATOR)
        };
        spans.push(Span::styled("hover-pause ", style));
    }
    if info.reduced_motion {
        spans.push(Span::styled("reduced-motion ", Style::default().fg(HEADER_SEPARATOR)));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FLAGS: FooterInfo = FooterInfo {
        pause_on_hover: true,
        reduced_motion: true,
        hovered: false,
    };

    #[test]
    fn wide_footer_shows_full_hints_and_flags() {
        let line = footer_line(200, ALL_FLAGS).to_string();
        assert!(line.starts_with(FULL_HINTS));
        assert!(line.contains("hover-pause reduced-motion "));
        assert!(line.ends_with(&format!(" v{VERSION} ")));
        assert_eq!(line.chars().count(), 200);
    }

    #[test]
    fn narrow_footer_falls_back_to_short_hints() {
        let line = footer_line(60, ALL_FLAGS).to_string();
        assert!(line.starts_with(SHORT_HINTS));
    }

    #[test]
    fn flags_are_omitted_when_disabled() {
        let line = footer_line(200, FooterInfo::default()).to_string();
        assert!(!line.contains("hover-pause"));
        assert!(!line.contains("reduced-motion"));
    }

    #[test]
    fn hovered_flag_is_highlighted() {
        let spans = flag_spans(FooterInfo {
            pause_on_hover: true,
            reduced_motion: false,
            hovered: true,
        });
        assert_eq!(spans[0].style.fg, Some(HERO_ACCENT));
    }
}
