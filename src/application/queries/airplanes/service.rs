use std::sync::Arc;

use crate::domain::airplane::AirplaneRepository;

pub struct AirplaneQueryService {
    pub(super) repo: Arc<dyn AirplaneRepository>,
}

impl AirplaneQueryService {
    pub fn new(repo: Arc<dyn AirplaneRepository>) -> Self {
        Self { repo }
    }
}
