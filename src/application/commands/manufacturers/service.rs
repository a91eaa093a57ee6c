// src/application/commands/manufacturers/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        manufacturer::{ManufacturerRepository, ManufacturerResolver},
        slug::SlugDeriver,
    },
};

pub struct ManufacturerCommandService {
    pub(super) repo: Arc<dyn ManufacturerRepository>,
    pub(super) resolver: Arc<ManufacturerResolver>,
    pub(super) deriver: Arc<SlugDeriver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ManufacturerCommandService {
    pub fn new(
        repo: Arc<dyn ManufacturerRepository>,
        resolver: Arc<ManufacturerResolver>,
        deriver: Arc<SlugDeriver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            resolver,
            deriver,
            clock,
        }
    }
}
