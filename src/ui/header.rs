use crate::ui::search::SearchState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, search: &SearchState, spinner_tick: u8) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "pixseek",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];

        if !search.query.is_empty() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("\"{}\"", search.query), text_style));
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} of {} images", search.images.len(), search.total_count),
                text_style,
            ));
            if search.total_count > 0 {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(
                    format!("page {}/{}", search.page, search.total_pages()),
                    text_style,
                ));
            }
        }

        if search.is_loading {
            let frame = SPINNER[spinner_tick as usize % SPINNER.len()];
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} loading", frame),
                Style::default().fg(ACCENT),
            ));
        } else if search.error.is_some() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("request failed", Style::default().fg(STATUS_ERROR)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
