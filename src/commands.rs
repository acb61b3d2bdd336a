//! One-shot commands: fetch, print, exit.

use std::fmt::Write as _;

use anyhow::{bail, Result};
use tracing::warn;

use crate::api::StoreClient;
use crate::cli::{CategoriesCommand, Command, OrdersArgs, ProductsArgs};
use crate::fetch::PageQuery;
use crate::model::{Category, Order, Page, Product};
use crate::ui::categories::CategoryState;
use crate::ui::list::pagination_bar;
use crate::ui::mvi::Reducer;
use crate::ui::orders::{OrderFilters, OrdersIntent, OrdersReducer, OrdersState};

pub async fn run(command: Command, client: &StoreClient, per_page: u32) -> Result<()> {
    let output = match command {
        Command::Products(args) => products(client, args, per_page).await?,
        Command::Categories(CategoriesCommand::List) => {
            format_categories(&fetch(client.categories().await, "Failed to load categories")?)
        }
        Command::Categories(CategoriesCommand::Create { name }) => {
            let message = fetch(client.create_category(&name).await, "Failed to create category")?;
            message.unwrap_or_else(|| crate::ui::categories::CREATED_FALLBACK_MESSAGE.to_string())
        }
        Command::Orders(args) => orders(client, args).await?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

async fn products(client: &StoreClient, args: ProductsArgs, per_page: u32) -> Result<String> {
    let mut query = PageQuery::new(args.per_page.unwrap_or(per_page));
    query.page = args.page;
    query.search = args.search.trim().to_string();
    for (key, value) in args.filters {
        query.filters.set(key, value);
    }

    let page = fetch(client.products(&query).await, "Failed to load products")?;
    if args.page > page.last_page() {
        bail!("Page {} is out of range (1-{})", args.page, page.last_page());
    }

    // Names are cosmetic; print codes if the category list is unavailable.
    let categories = match client.categories().await {
        Ok(categories) => categories,
        Err(err) => {
            warn!(error = %err, "category names unavailable");
            Vec::new()
        }
    };
    Ok(format_products(&page, &CategoryState { categories, ..Default::default() }))
}

async fn orders(client: &StoreClient, args: OrdersArgs) -> Result<String> {
    let orders = fetch(client.order_history().await, "Failed to load order history")?;
    let state = OrdersState {
        filters: OrderFilters {
            sort_by: args.sort,
            order: args.order,
            status: args.status,
        },
        ..Default::default()
    };
    let state = OrdersReducer::reduce(state, OrdersIntent::Loaded(orders));
    Ok(format_orders(&state.visible(), args.expand))
}

fn fetch<T>(result: Result<T, crate::api::RequestError>, context: &str) -> Result<T> {
    result.map_err(|err| anyhow::anyhow!(err.user_message(context)))
}

pub fn format_products(page: &Page<Product>, categories: &CategoryState) -> String {
    let mut out = String::new();
    if page.items.is_empty() {
        out.push_str("No products found.\n");
    }
    for product in &page.items {
        let category = if categories.categories.is_empty() {
            product.category.to_string()
        } else {
            categories.name_for(&product.category).to_string()
        };
        let _ = writeln!(
            out,
            "{:<8} {:<32} {:<16} {:>20} {:>6}",
            product.id.to_string(),
            product.name,
            category,
            product.list_price.to_string(),
            product.stock
        );
    }
    match pagination_bar(page) {
        Some(bar) => {
            let pages: Vec<String> = bar
                .pages
                .map(|p| if p == bar.current { format!("[{p}]") } else { p.to_string() })
                .collect();
            let _ = writeln!(out, "\n{}  (page {} of {})", pages.join(" "), bar.current, bar.total);
        }
        None => {
            let _ = writeln!(out, "\npage {} of {}", page.current_page, page.last_page());
        }
    }
    out
}

pub fn format_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories.\n".to_string();
    }
    let mut out = String::new();
    for category in categories {
        let code = category.code.as_ref().map(ToString::to_string).unwrap_or_default();
        let _ = writeln!(out, "{:<8} {:<12} {}", category.id.to_string(), code, category.name);
    }
    out
}

pub fn format_orders(orders: &[&Order], expand: bool) -> String {
    if orders.is_empty() {
        return "No orders.\n".to_string();
    }
    let mut out = String::new();
    for order in orders {
        let _ = writeln!(
            out,
            "#{:<6} {}  {:<10} total {}  paid {}",
            order.id.to_string(),
            order.placed_at,
            order.status.to_string(),
            order.total,
            order.paid
        );
        if expand {
            for line in &order.lines {
                let _ = writeln!(out, "    {} x{} @ {}", line.name, line.quantity, line.price);
            }
            let _ = writeln!(out, "    saved {}", order.savings());
        }
    }
    out
}
