use std::sync::Arc;

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::api::StoreClient;
use crate::model::{Product, RecordId};
use crate::ui::categories::{CategoryIntent, CategoryReducer, CategoryState};
use crate::ui::events::{AppEvent, AppEventSender};
use crate::ui::input::{action_for, Action};
use crate::ui::list::{FetchTicket, ListController, ListIntent, ListState};
use crate::ui::mvi::Reducer;
use crate::ui::orders::{OrdersIntent, OrdersReducer, OrdersState, SortKey, HISTORY_LOAD_FAILED};

pub const CATEGORY_FILTER_KEY: &str = "category";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tab {
    Products,
    Categories,
    Orders,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Products, Tab::Categories, Tab::Orders];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Products => "Products",
            Tab::Categories => "Categories",
            Tab::Orders => "Orders",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Products => 0,
            Tab::Categories => 1,
            Tab::Orders => 2,
        }
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditTarget {
    Search,
    PageJump,
    NewCategory,
}

impl EditTarget {
    pub fn prompt(self) -> &'static str {
        match self {
            EditTarget::Search => "Search",
            EditTarget::PageJump => "Go to page",
            EditTarget::NewCategory => "New category",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing { target: EditTarget, buffer: String },
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Console application state.
///
/// Backend calls are spawned on the tokio runtime; their outcomes come back
/// through the event channel as intents and are applied in `on_event`.
pub struct App {
    should_quit: bool,
    tab: Tab,
    mode: InputMode,
    client: Arc<StoreClient>,
    products: ListController<StoreClient>,
    categories: CategoryState,
    orders: OrdersState,
    /// Id of the category used as product filter.
    category_filter: Option<RecordId>,
    /// A category load was requested while another was in flight.
    categories_reload_pending: bool,
    events: AppEventSender,
    ticks: u64,
}

impl App {
    pub fn new(client: Arc<StoreClient>, per_page: u32, events: AppEventSender) -> Self {
        Self {
            should_quit: false,
            tab: Tab::Products,
            mode: InputMode::Normal,
            products: ListController::new(Arc::clone(&client), per_page, "Failed to load products"),
            client,
            categories: CategoryState::default(),
            orders: OrdersState::default(),
            category_filter: None,
            categories_reload_pending: false,
            events,
            ticks: 0,
        }
    }

    /// Kicks off the initial load of every screen.
    pub fn start(&mut self) {
        let ticket = self.products.start();
        self.spawn_product_fetch(ticket);
        self.load_categories();
        self.load_orders();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn products(&self) -> &ListState<Product> {
        self.products.state()
    }

    pub fn categories(&self) -> &CategoryState {
        &self.categories
    }

    pub fn orders(&self) -> &OrdersState {
        &self.orders
    }

    /// Name of the category currently used as product filter.
    pub fn category_filter_name(&self) -> Option<&str> {
        let id = self.category_filter.as_ref()?;
        self.categories
            .categories
            .iter()
            .find(|category| &category.id == id)
            .map(|category| category.name.as_str())
    }

    /// True while any backend call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.products.is_fetching()
            || self.categories.loading
            || self.categories.submitting
            || self.orders.loading
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Resize(..) => {}
            AppEvent::Tick => self.ticks = self.ticks.wrapping_add(1),
            AppEvent::Products(intent) => self.dispatch_products(intent),
            AppEvent::Categories(intent) => {
                let created = matches!(intent, CategoryIntent::CreateSucceeded(_));
                let load_finished = matches!(
                    intent,
                    CategoryIntent::Loaded(_) | CategoryIntent::LoadFailed(_)
                );
                dispatch_mvi!(self, categories, CategoryReducer, intent);
                let follow_up =
                    load_finished && std::mem::take(&mut self.categories_reload_pending);
                if created || follow_up {
                    self.load_categories();
                }
            }
            AppEvent::Orders(intent) => {
                dispatch_mvi!(self, orders, OrdersReducer, intent);
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(&self.mode, self.tab, key) {
            self.perform(action);
        }
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => self.request_quit(),
            Action::NextTab => self.tab = self.tab.next(),
            Action::PreviousTab => self.tab = self.tab.previous(),
            Action::SelectTab(tab) => self.tab = tab,
            Action::Refresh => match self.tab {
                Tab::Products => self.dispatch_products(ListIntent::Refresh),
                Tab::Categories => self.load_categories(),
                Tab::Orders => self.load_orders(),
            },
            Action::DismissMessages => match self.tab {
                Tab::Products => self.dispatch_products(ListIntent::DismissError),
                _ => {
                    let intent = CategoryIntent::DismissMessages;
                    dispatch_mvi!(self, categories, CategoryReducer, intent);
                }
            },
            Action::BeginEdit(target) => {
                let buffer = match target {
                    EditTarget::Search => self.products().query.search.clone(),
                    EditTarget::PageJump => self.products().jump_input.clone(),
                    EditTarget::NewCategory => self.categories.new_name.clone(),
                };
                self.mode = InputMode::Editing { target, buffer };
            }
            Action::EditChar(ch) => {
                if let InputMode::Editing { buffer, .. } = &mut self.mode {
                    buffer.push(ch);
                }
            }
            Action::EditBackspace => {
                if let InputMode::Editing { buffer, .. } = &mut self.mode {
                    buffer.pop();
                }
            }
            Action::CancelEdit => self.mode = InputMode::Normal,
            Action::CommitEdit => self.commit_edit(),
            Action::NextPage => self.dispatch_products(ListIntent::NextPage),
            Action::PreviousPage => self.dispatch_products(ListIntent::PreviousPage),
            Action::CycleCategoryFilter => self.cycle_category_filter(),
            Action::ClearFilters => {
                self.category_filter = None;
                self.dispatch_products(ListIntent::ClearFilters);
            }
            Action::ToggleSortKey => {
                let next = match self.orders.filters.sort_by {
                    SortKey::Time => SortKey::Value,
                    SortKey::Value => SortKey::Time,
                };
                dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::SetSort(next));
            }
            Action::ToggleSortOrder => {
                dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::ToggleOrder);
            }
            Action::CycleStatus => {
                dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::CycleStatus);
            }
            Action::SelectNext => {
                dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::SelectNext);
            }
            Action::SelectPrevious => {
                dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::SelectPrevious);
            }
            Action::ToggleDetails => {
                dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::ToggleSelected);
            }
        }
    }

    fn commit_edit(&mut self) {
        let InputMode::Editing { target, buffer } = std::mem::take(&mut self.mode) else {
            return;
        };
        match target {
            EditTarget::Search => self.dispatch_products(ListIntent::SetSearch(buffer)),
            EditTarget::PageJump => {
                self.dispatch_products(ListIntent::EditJump(buffer));
                self.dispatch_products(ListIntent::SubmitJump);
            }
            EditTarget::NewCategory => {
                dispatch_mvi!(self, categories, CategoryReducer, CategoryIntent::EditName(buffer));
                self.submit_category();
            }
        }
    }

    /// All, then each loaded category in list order, then back to all.
    /// A selected category that vanished from the list restarts the cycle.
    fn cycle_category_filter(&mut self) {
        let categories = &self.categories.categories;
        let position = self
            .category_filter
            .as_ref()
            .and_then(|id| categories.iter().position(|category| &category.id == id));
        let next = match position {
            Some(idx) => categories.get(idx + 1),
            None => categories.first(),
        };
        self.category_filter = next.map(|category| category.id.clone());
        let value = self
            .category_filter
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        self.dispatch_products(ListIntent::SetFilter {
            key: CATEGORY_FILTER_KEY.to_string(),
            value,
        });
    }

    fn dispatch_products(&mut self, intent: ListIntent<Product>) {
        let ticket = self.products.dispatch(intent);
        self.spawn_product_fetch(ticket);
    }

    fn spawn_product_fetch(&self, ticket: Option<FetchTicket<StoreClient>>) {
        let Some(ticket) = ticket else {
            return;
        };
        let tx = self.events.clone();
        tokio::spawn(async move {
            let outcome = ticket.run().await;
            let _ = tx.send(AppEvent::Products(outcome));
        });
    }

    fn load_categories(&mut self) {
        if self.categories.loading {
            debug!("category load already in flight, reloading once it lands");
            self.categories_reload_pending = true;
            return;
        }
        dispatch_mvi!(self, categories, CategoryReducer, CategoryIntent::LoadStarted);

        let client = Arc::clone(&self.client);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let intent = match client.categories().await {
                Ok(categories) => CategoryIntent::Loaded(categories),
                Err(err) => {
                    CategoryIntent::LoadFailed(err.user_message("Failed to load categories"))
                }
            };
            let _ = tx.send(AppEvent::Categories(intent));
        });
    }

    fn submit_category(&mut self) {
        let was_submitting = self.categories.submitting;
        dispatch_mvi!(self, categories, CategoryReducer, CategoryIntent::SubmitCreate);
        if was_submitting {
            return;
        }
        let Some(name) = self.categories.pending_name().map(str::to_string) else {
            return;
        };

        let client = Arc::clone(&self.client);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let intent = match client.create_category(&name).await {
                Ok(message) => CategoryIntent::CreateSucceeded(message),
                Err(err) => {
                    CategoryIntent::CreateFailed(err.user_message("Failed to create category"))
                }
            };
            let _ = tx.send(AppEvent::Categories(intent));
        });
    }

    fn load_orders(&mut self) {
        if self.orders.loading {
            debug!("order history load already in flight");
            return;
        }
        dispatch_mvi!(self, orders, OrdersReducer, OrdersIntent::LoadStarted);

        let client = Arc::clone(&self.client);
        let tx = self.events.clone();
        tokio::spawn(async move {
            let intent = match client.order_history().await {
                Ok(orders) => OrdersIntent::Loaded(orders),
                Err(err) => {
                    tracing::warn!(error = %err, "order history load failed");
                    OrdersIntent::LoadFailed(HISTORY_LOAD_FAILED.to_string())
                }
            };
            let _ = tx.send(AppEvent::Orders(intent));
        });
    }
}
