use std::collections::BTreeSet;
use std::fmt;

use crate::model::{Order, OrderStatus, RecordId};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    /// Order date
    #[default]
    Time,
    /// Order total
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Processed,
    Cancelled,
}

impl StatusFilter {
    pub fn accepts(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == OrderStatus::Pending,
            StatusFilter::Processed => status == OrderStatus::Processed,
            StatusFilter::Cancelled => status == OrderStatus::Cancelled,
        }
    }

    /// Next option in dropdown order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Pending,
            StatusFilter::Pending => StatusFilter::Processed,
            StatusFilter::Processed => StatusFilter::Cancelled,
            StatusFilter::Cancelled => StatusFilter::All,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusFilter::All => "All statuses",
            StatusFilter::Pending => "Pending",
            StatusFilter::Processed => "Processed",
            StatusFilter::Cancelled => "Cancelled",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderFilters {
    pub sort_by: SortKey,
    pub order: SortOrder,
    pub status: StatusFilter,
}

/// Purchase history. Fetched once in full; filtering and sorting happen
/// client-side over the last good batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub filters: OrderFilters,
    pub expanded: BTreeSet<RecordId>,
    /// Index into [`OrdersState::visible`].
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for OrdersState {}

impl OrdersState {
    /// Orders passing the status filter, sorted by the chosen key.
    pub fn visible(&self) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .filter(|order| self.filters.status.accepts(order.status))
            .collect();

        orders.sort_by(|a, b| {
            let ordering = match self.filters.sort_by {
                // Backend timestamps are `YYYY-MM-DD hh:mm:ss`, so text order is time order.
                SortKey::Time => a.placed_at.cmp(&b.placed_at),
                SortKey::Value => a
                    .total
                    .value()
                    .partial_cmp(&b.total.value())
                    .unwrap_or(std::cmp::Ordering::Equal),
            };
            match self.filters.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        orders
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expanded.contains(id)
    }

    pub fn selected_order(&self) -> Option<&Order> {
        self.visible().get(self.selected).copied()
    }
}
