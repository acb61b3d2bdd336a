use crate::api::validate_category_name;
use crate::ui::categories::intent::CategoryIntent;
use crate::ui::categories::state::CategoryState;
use crate::ui::mvi::Reducer;

pub const CREATED_FALLBACK_MESSAGE: &str = "Category created.";

pub struct CategoryReducer;

impl Reducer for CategoryReducer {
    type State = CategoryState;
    type Intent = CategoryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CategoryIntent::LoadStarted => {
                state.loading = true;
                state
            }
            CategoryIntent::Loaded(categories) => {
                state.categories = categories;
                state.loading = false;
                state
            }
            CategoryIntent::LoadFailed(message) => {
                state.loading = false;
                state.error = Some(message);
                state
            }
            CategoryIntent::EditName(name) => {
                state.new_name = name;
                state
            }
            CategoryIntent::SubmitCreate => {
                if state.submitting {
                    return state;
                }
                match validate_category_name(&state.new_name) {
                    Ok(_) => {
                        state.submitting = true;
                        state.error = None;
                        state.success = None;
                    }
                    Err(err) => {
                        state.error = Some(err.user_message("Failed to create category"));
                        state.success = None;
                    }
                }
                state
            }
            CategoryIntent::CreateSucceeded(message) => {
                state.submitting = false;
                state.success =
                    Some(message.unwrap_or_else(|| CREATED_FALLBACK_MESSAGE.to_string()));
                state.error = None;
                state.new_name.clear();
                state
            }
            CategoryIntent::CreateFailed(message) => {
                state.submitting = false;
                state.error = Some(message);
                state.success = None;
                state
            }
            CategoryIntent::DismissMessages => {
                state.error = None;
                state.success = None;
                state
            }
        }
    }
}
