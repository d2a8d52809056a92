use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchBarIntent {
    Insert(char),
    /// Pasted text; line breaks are dropped.
    Paste(String),
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    Home,
    End,
    Clear,
}

impl Intent for SearchBarIntent {}
