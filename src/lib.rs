use config::Config;
use database::AdStore;
use std::sync::Arc;

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod service;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AdStore>,
    pub config: Config,
}
