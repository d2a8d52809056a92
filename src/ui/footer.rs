use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints on the left, crate version on the right.
pub struct Footer;

impl Footer {
    pub fn hints(focus: Focus, preview_visible: bool) -> &'static str {
        match (preview_visible, focus) {
            (true, _) => " Esc: Close │ y: Copy URL │ Ctrl+Q: Quit",
            (false, Focus::SearchBar) => {
                " Enter: Search │ Tab: Gallery │ Ctrl+U: Clear │ Esc: Quit"
            }
            (false, Focus::Gallery) => {
                " ↑/↓: Move │ Enter: Preview │ m: Load more │ Tab: Search │ q: Quit"
            }
        }
    }

    pub fn widget(area: Rect, focus: Focus, preview_visible: bool) -> Paragraph<'static> {
        let hints = Self::hints(focus, preview_visible);
        let version = format!("v{} ", VERSION);

        // Widths in chars: the hint separators are multi-byte
        let inner = area.width.saturating_sub(2) as usize;
        let gap = inner.saturating_sub(hints.chars().count() + version.chars().count());

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        Paragraph::new(Line::from(vec![
            Span::raw(hints),
            Span::raw(" ".repeat(gap)),
            Span::raw(version),
        ]))
        .style(dim)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
