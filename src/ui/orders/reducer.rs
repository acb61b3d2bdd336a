use crate::ui::mvi::Reducer;
use crate::ui::orders::intent::OrdersIntent;
use crate::ui::orders::state::OrdersState;

pub const HISTORY_LOAD_FAILED: &str = "Failed to load order history.";

pub struct OrdersReducer;

impl Reducer for OrdersReducer {
    type State = OrdersState;
    type Intent = OrdersIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OrdersIntent::LoadStarted => {
                state.loading = true;
                state
            }
            OrdersIntent::Loaded(orders) => {
                state.orders = orders;
                state.loading = false;
                state.error = None;
                state.expanded.retain(|id| state.orders.iter().any(|o| &o.id == id));
                clamp_selection(state)
            }
            OrdersIntent::LoadFailed(message) => {
                state.loading = false;
                state.error = Some(message);
                state
            }
            OrdersIntent::SetSort(sort_by) => {
                state.filters.sort_by = sort_by;
                state
            }
            OrdersIntent::SetOrder(order) => {
                state.filters.order = order;
                state
            }
            OrdersIntent::ToggleOrder => {
                state.filters.order = state.filters.order.flipped();
                state
            }
            OrdersIntent::SetStatus(status) => {
                state.filters.status = status;
                clamp_selection(state)
            }
            OrdersIntent::CycleStatus => {
                state.filters.status = state.filters.status.next();
                clamp_selection(state)
            }
            OrdersIntent::ToggleDetails(id) => {
                if !state.expanded.remove(&id) {
                    state.expanded.insert(id);
                }
                state
            }
            OrdersIntent::ToggleSelected => {
                let Some(id) = state.selected_order().map(|order| order.id.clone()) else {
                    return state;
                };
                Self::reduce(state, OrdersIntent::ToggleDetails(id))
            }
            OrdersIntent::SelectNext => {
                let count = state.visible().len();
                if count > 0 {
                    state.selected = (state.selected + 1) % count;
                }
                state
            }
            OrdersIntent::SelectPrevious => {
                let count = state.visible().len();
                if count > 0 {
                    state.selected = if state.selected == 0 {
                        count - 1
                    } else {
                        state.selected - 1
                    };
                }
                state
            }
        }
    }
}

fn clamp_selection(mut state: OrdersState) -> OrdersState {
    let count = state.visible().len();
    state.selected = state.selected.min(count.saturating_sub(1));
    state
}
