//! Key bindings.
//!
//! Keys map to [`Action`]s depending on the active tab and whether a text
//! field is being edited; the app performs the action.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{EditTarget, InputMode, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PreviousTab,
    SelectTab(Tab),
    Refresh,
    DismissMessages,
    BeginEdit(EditTarget),
    EditChar(char),
    EditBackspace,
    CommitEdit,
    CancelEdit,
    NextPage,
    PreviousPage,
    CycleCategoryFilter,
    ClearFilters,
    ToggleSortKey,
    ToggleSortOrder,
    CycleStatus,
    SelectNext,
    SelectPrevious,
    ToggleDetails,
}

pub fn action_for(mode: &InputMode, tab: Tab, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if let InputMode::Editing { .. } = mode {
        return match key.code {
            KeyCode::Enter => Some(Action::CommitEdit),
            KeyCode::Esc => Some(Action::CancelEdit),
            KeyCode::Backspace => Some(Action::EditBackspace),
            KeyCode::Char(ch) => Some(Action::EditChar(ch)),
            _ => None,
        };
    }

    let global = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PreviousTab),
        KeyCode::Char('1') => Some(Action::SelectTab(Tab::Products)),
        KeyCode::Char('2') => Some(Action::SelectTab(Tab::Categories)),
        KeyCode::Char('3') => Some(Action::SelectTab(Tab::Orders)),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('d') => Some(Action::DismissMessages),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    match tab {
        Tab::Products => match key.code {
            KeyCode::Char('/') => Some(Action::BeginEdit(EditTarget::Search)),
            KeyCode::Char('g') => Some(Action::BeginEdit(EditTarget::PageJump)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousPage),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
            KeyCode::Char('c') => Some(Action::CycleCategoryFilter),
            KeyCode::Char('x') => Some(Action::ClearFilters),
            _ => None,
        },
        Tab::Categories => match key.code {
            KeyCode::Char('n') => Some(Action::BeginEdit(EditTarget::NewCategory)),
            _ => None,
        },
        Tab::Orders => match key.code {
            KeyCode::Char('s') => Some(Action::ToggleSortKey),
            KeyCode::Char('o') => Some(Action::ToggleSortOrder),
            KeyCode::Char('f') => Some(Action::CycleStatus),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleDetails),
            _ => None,
        },
    }
}
