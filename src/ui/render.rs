use crate::ui::app::App;
use crate::ui::footer::{Footer, FooterInfo};
use crate::ui::header::{Header, HeaderInfo};
use crate::ui::layout::{centered_band, layout_regions};
use crate::ui::slider::{Clock, ItemMarker, SliderState};
use crate::ui::theme::{DOT_INACTIVE, GLOBAL_BORDER, HERO_ACCENT, SLIDE_FADED, SLIDE_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.slider().state();

    let position = (!state.is_empty()).then(|| (state.current_index(), state.len()));
    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(HeaderInfo {
            title: &app.config().content.title,
            status: app.status(),
            position,
            interval_ms: state.config().interval_ms,
        }),
        header,
    );

    frame.render_widget(Clear, body);
    let border_color = if app.pointer_inside() {
        HERO_ACCENT
    } else {
        GLOBAL_BORDER
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
        body,
    );
    let band = centered_band(body, 3);
    frame.render_widget(Paragraph::new(banner_lines(state)).alignment(Alignment::Center), band);

    let footer_widget = Footer::new();
    let footer_info = FooterInfo {
        pause_on_hover: state.config().pause_on_hover,
        reduced_motion: app.config().slider.reduced_motion,
        hovered: app.pointer_inside(),
    };
    frame.render_widget(footer_widget.widget(footer, footer_info), footer);
}

/// Slide text styled by its marker, a blank row, then position dots.
pub fn banner_lines(state: &SliderState) -> Vec<Line<'static>> {
    let text_line = match state.visible_item() {
        Some((item, marker)) => Line::from(Span::styled(item.text().to_string(), marker_style(marker))),
        None => Line::from(""),
    };

    let dots: Vec<Span<'static>> = state
        .markers()
        .iter()
        .enumerate()
        .map(|(index, marker)| {
            let (symbol, color) = if marker.is_active() || index == state.current_index() {
                ("●", HERO_ACCENT)
            } else {
                ("○", DOT_INACTIVE)
            };
            Span::styled(format!("{symbol} "), Style::default().fg(color))
        })
        .collect();

    vec![text_line, Line::from(""), Line::from(dots)]
}

pub fn marker_style(marker: ItemMarker) -> Style {
    match marker {
        ItemMarker::Idle => Style::default(),
        ItemMarker::Exiting => Style::default().fg(SLIDE_FADED).add_modifier(Modifier::DIM),
        ItemMarker::Entering => Style::default()
            .fg(SLIDE_TEXT)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ItemMarker::Active => Style::default().fg(SLIDE_TEXT).add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::slider::{ManualClock, SliderConfig, SliderController, SliderTarget};

    fn controller() -> (ManualClock, SliderController<ManualClock>) {
        let clock = ManualClock::new();
        let mut controller = SliderController::new(clock.clone());
        controller.init(
            Some(SliderTarget::new("hero", ["alpha", "beta"])),
            SliderConfig::default(),
            false,
        );
        (clock, controller)
    }

    #[test]
    fn banner_shows_active_text_bold() {
        let (_, controller) = controller();
        let lines = banner_lines(controller.state());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].content, "alpha");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[2].spans.len(), 2);
    }

    #[test]
    fn banner_is_blank_while_settling() {
        let (clock, mut controller) = controller();
        controller.next_slide();
        clock.set(450);
        controller.tick();
        let lines = banner_lines(controller.state());
        assert_eq!(lines[0].width(), 0);
    }

    #[test]
    fn exiting_text_is_dimmed() {
        let (_, mut controller) = controller();
        controller.next_slide();
        let lines = banner_lines(controller.state());
        assert_eq!(lines[0].spans[0].content, "alpha");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::DIM));
    }
}
