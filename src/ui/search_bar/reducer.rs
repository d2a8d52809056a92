use crate::ui::mvi::Reducer;
use crate::ui::search_bar::intent::SearchBarIntent;
use crate::ui::search_bar::state::SearchBarState;

pub struct SearchBarReducer;

impl Reducer for SearchBarReducer {
    type State = SearchBarState;
    type Intent = SearchBarIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let len = state.char_len();
        let cursor = state.cursor.min(len);
        match intent {
            SearchBarIntent::Insert(ch) => {
                if ch.is_control() {
                    return state;
                }
                let at = state.byte_offset(cursor);
                state.text.insert(at, ch);
                state.cursor = cursor + 1;
            }
            SearchBarIntent::Paste(text) => {
                let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
                let at = state.byte_offset(cursor);
                state.text.insert_str(at, &cleaned);
                state.cursor = cursor + cleaned.chars().count();
            }
            SearchBarIntent::Backspace => {
                if cursor > 0 {
                    let at = state.byte_offset(cursor - 1);
                    state.text.remove(at);
                    state.cursor = cursor - 1;
                }
            }
            SearchBarIntent::Delete => {
                if cursor < len {
                    let at = state.byte_offset(cursor);
                    state.text.remove(at);
                }
                state.cursor = cursor;
            }
            SearchBarIntent::MoveLeft => state.cursor = cursor.saturating_sub(1),
            SearchBarIntent::MoveRight => state.cursor = (cursor + 1).min(len),
            SearchBarIntent::Home => state.cursor = 0,
            SearchBarIntent::End => state.cursor = len,
            SearchBarIntent::Clear => return SearchBarState::default(),
        }
        state
    }
}
