use std::sync::Arc;

use nutritrack_core::application::NutriTrackService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriTrackService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriTrackService) -> Self {
        Self { args, service }
    }
}
