use std::sync::Arc;

use crate::domain::manufacturer::ManufacturerRepository;

pub struct ManufacturerQueryService {
    pub(super) repo: Arc<dyn ManufacturerRepository>,
}

impl ManufacturerQueryService {
    pub fn new(repo: Arc<dyn ManufacturerRepository>) -> Self {
        Self { repo }
    }
}
