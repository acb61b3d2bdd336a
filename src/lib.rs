pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod ui;
