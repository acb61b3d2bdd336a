use crate::model::{Order, RecordId};
use crate::ui::mvi::Intent;
use crate::ui::orders::state::{SortKey, SortOrder, StatusFilter};

#[derive(Debug, Clone)]
pub enum OrdersIntent {
    LoadStarted,
    Loaded(Vec<Order>),
    LoadFailed(String),
    SetSort(SortKey),
    SetOrder(SortOrder),
    ToggleOrder,
    SetStatus(StatusFilter),
    CycleStatus,
    /// Expand or collapse the line items of one order.
    ToggleDetails(RecordId),
    ToggleSelected,
    SelectNext,
    SelectPrevious,
}

impl Intent for OrdersIntent {}
