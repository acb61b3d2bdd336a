//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::ui::orders::{SortKey, SortOrder, StatusFilter};

#[derive(Debug, Parser)]
#[command(name = "shopdesk", version, about = "Jewelry storefront admin console")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Without a command the interactive console opens
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of the product catalog
    Products(ProductsArgs),
    /// List or create product categories
    #[command(subcommand)]
    Categories(CategoriesCommand),
    /// Print the order history
    Orders(OrdersArgs),
}

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Records per page (defaults to the configured value)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: Option<u32>,

    #[arg(long, default_value = "")]
    pub search: String,

    /// Extra filter, repeatable
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// Print every category
    List,
    /// Create a category
    Create {
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[arg(long, value_enum, default_value_t = SortKey::Time)]
    pub sort: SortKey,

    #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
    pub order: SortOrder,

    #[arg(long, value_enum, default_value_t = StatusFilter::All)]
    pub status: StatusFilter,

    /// Print the lines of every order
    #[arg(long)]
    pub expand: bool,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("filter key must not be empty".to_string());
    }
    Ok((key.to_string(), value.trim().to_string()))
}
