use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, toast_rect};
use crate::ui::search::SearchState;
use crate::ui::theme::{
    notice_color, ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR,
    HEADER_TEXT, POPUP_BORDER,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(
        Header::new().widget(app.search(), app.spinner_tick()),
        regions.header,
    );
    draw_search_bar(frame, app, regions.search_bar);
    frame.render_widget(Clear, regions.gallery);
    draw_gallery(frame, app, regions.gallery);
    frame.render_widget(
        Footer::widget(regions.footer, app.focus(), app.preview_visible()),
        regions.footer,
    );

    if app.preview_visible() {
        draw_preview(frame, app.search(), area);
    }
    draw_toasts(frame, app, area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}

fn draw_search_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let focused = app.focus() == Focus::SearchBar && !app.preview_visible();
    let bar = app.search_bar();

    // Scroll horizontally so the cursor stays inside the box
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor = bar.cursor.min(bar.char_len());
    let start = cursor.saturating_sub(inner_width.saturating_sub(1));
    let visible: String = bar.text.chars().skip(start).take(inner_width).collect();

    let content = if bar.text.is_empty() && !focused {
        Line::from(Span::styled(
            "Search images and photos",
            Style::default().fg(HEADER_SEPARATOR),
        ))
    } else {
        Line::from(Span::styled(visible, Style::default().fg(HEADER_TEXT)))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(" Search ");
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && area.height > 2 && inner_width > 0 {
        let x = area.x + 1 + (cursor - start) as u16;
        let y = area.y + 1;
        frame.set_cursor_position((x, y));
    }
}

fn draw_gallery(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let search = app.search();
    let focused = app.focus() == Focus::Gallery && !app.preview_visible();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(" Gallery ");

    if search.images.is_empty() {
        let message = if search.is_loading {
            "Loading..."
        } else if search.query.is_empty() {
            "Type a query and press Enter."
        } else {
            "Nothing to show."
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(HEADER_SEPARATOR),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let mut items: Vec<ListItem> = search
        .images
        .iter()
        .enumerate()
        .map(|(idx, image)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:>4}. ", idx + 1),
                        Style::default().fg(HEADER_SEPARATOR),
                    ),
                    Span::styled(image.tags.clone(), Style::default().fg(HEADER_TEXT)),
                    Span::styled(
                        format!("  #{}", image.id),
                        Style::default().fg(HEADER_SEPARATOR),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("      {}", image.thumbnail_url),
                    Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM),
                )),
            ])
        })
        .collect();

    if search.show_load_more() {
        items.push(ListItem::new(Line::from(Span::styled(
            "      ▼ Load more",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(focused.then_some(app.selection()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_preview(frame: &mut Frame<'_>, search: &SearchState, area: Rect) {
    let popup = centered_rect(70, 40, area);
    let preview = &search.preview;
    let lines = vec![
        Line::from(vec![
            Span::styled("Tags: ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(preview.tags.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            preview.full_size_url.clone(),
            Style::default().fg(ACCENT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y: copy URL   Esc: close",
            Style::default().fg(HEADER_SEPARATOR),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER))
                .title(" Preview "),
        ),
        popup,
    );
}

fn draw_toasts(frame: &mut Frame<'_>, app: &App, area: Rect) {
    for (index, toast) in app.toasts().enumerate() {
        let rect = toast_rect(area, index as u16, TOAST_WIDTH, TOAST_HEIGHT);
        if rect.height < TOAST_HEIGHT {
            break;
        }
        let color = notice_color(toast.notice.level);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                toast.notice.message.clone(),
                Style::default().fg(HEADER_TEXT),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ", toast.notice.level.label())),
            ),
            rect,
        );
    }
}
