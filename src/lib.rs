pub mod api;
pub mod cli;
pub mod config;
pub mod connectivity;
pub mod logging;
pub mod repository;
pub mod ui;
