use crate::ui::mvi::UiState;

/// Text of the query input and the cursor position within it.
///
/// `cursor` counts chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchBarState {
    pub text: String,
    pub cursor: usize,
}

impl UiState for SearchBarState {}

impl SearchBarState {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the char at `cursor`.
    pub fn byte_offset(&self, cursor: usize) -> usize {
        self.text
            .char_indices()
            .nth(cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}
