use ratatui::style::Color;

use crate::ui::search::NoticeLevel;

pub const ACCENT: Color = Color::Rgb(0x2e, 0xc6, 0x6d);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FOCUS_BORDER: Color = Color::Rgb(0x3f, 0x51, 0xb5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_INFO: Color = Color::Rgb(0x34, 0x98, 0xdb);
pub const STATUS_WARNING: Color = Color::Rgb(0xf1, 0xc4, 0x0f);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => STATUS_OK,
        NoticeLevel::Error => STATUS_ERROR,
        NoticeLevel::Info => STATUS_INFO,
        NoticeLevel::Warning => STATUS_WARNING,
    }
}
