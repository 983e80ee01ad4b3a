use crate::{config::Config, domain::locode::repository::LocodeRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub locodes: Arc<dyn LocodeRepository>,
    pub config: Config,
}

impl AppState {
    pub fn new(locodes: Arc<dyn LocodeRepository>, config: Config) -> Self {
        Self { locodes, config }
    }
}
