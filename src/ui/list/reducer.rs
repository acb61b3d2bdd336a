use std::marker::PhantomData;

use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::{ListState, LoadPhase};
use crate::ui::mvi::Reducer;

pub const INVALID_PAGE_MESSAGE: &str = "Please enter a valid page number.";

pub struct ListReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for ListReducer<T> {
    type State = ListState<T>;
    type Intent = ListIntent<T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::SetSearch(search) => {
                if state.query.search != search {
                    state.query.search = search;
                    state.query.page = 1;
                }
                state
            }
            ListIntent::SetFilter { key, value } => {
                if state.query.filters.set(key, value) {
                    state.query.page = 1;
                }
                state
            }
            ListIntent::ClearFilters => {
                if state.query.filters.clear() {
                    state.query.page = 1;
                }
                state
            }
            ListIntent::GoToPage(page) => go_to(state, page),
            ListIntent::NextPage => {
                if !state.page.has_next() {
                    return state;
                }
                let next = state.current_page() + 1;
                go_to(state, next)
            }
            ListIntent::PreviousPage => {
                if !state.page.has_previous() {
                    return state;
                }
                let previous = state.current_page() - 1;
                go_to(state, previous)
            }
            ListIntent::EditJump(text) => {
                state.jump_input = text;
                state
            }
            ListIntent::SubmitJump => match state.jump_input.trim().parse::<u32>() {
                Ok(page) => go_to(state, page),
                Err(_) => reject_page(state),
            },
            // Query is unchanged; the controller forces the fetch.
            ListIntent::Refresh => state,
            ListIntent::DismissError => {
                state.error = None;
                state
            }
            ListIntent::FetchStarted => {
                state.phase = LoadPhase::Loading;
                state
            }
            ListIntent::FetchSucceeded { query, page } => {
                // Outcome of a superseded query: a newer fetch is (or will be) under way.
                if query != state.query {
                    return state;
                }
                let page = page.normalized();
                state.query.page = page.current_page;
                state.jump_input = page.current_page.to_string();
                state.page = page;
                state.phase = LoadPhase::Idle;
                state.error = None;
                state
            }
            ListIntent::FetchFailed { query, message } => {
                if query != state.query {
                    return state;
                }
                state.phase = LoadPhase::Idle;
                state.error = Some(message);
                state
            }
        }
    }
}

fn go_to<T>(mut state: ListState<T>, page: u32) -> ListState<T> {
    if !state.page.contains_page(page) {
        return reject_page(state);
    }
    state.query.page = page;
    state.jump_input = page.to_string();
    state.error = None;
    state
}

fn reject_page<T>(mut state: ListState<T>) -> ListState<T> {
    state.error = Some(INVALID_PAGE_MESSAGE.to_string());
    state
}
