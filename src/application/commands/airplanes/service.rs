// src/application/commands/airplanes/service.rs
use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::{
        airplane::{AirplaneRepository, AirplaneYear},
        manufacturer::ManufacturerResolver,
        slug::SlugDeriver,
    },
};

pub struct AirplaneCommandService {
    pub(super) repo: Arc<dyn AirplaneRepository>,
    pub(super) resolver: Arc<ManufacturerResolver>,
    pub(super) deriver: Arc<SlugDeriver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AirplaneCommandService {
    pub fn new(
        repo: Arc<dyn AirplaneRepository>,
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

    pub(super) fn parse_year(&self, year: Option<i32>) -> ApplicationResult<Option<AirplaneYear>> {
        let current_year = self.clock.current_year();
        Ok(year
            .map(|value| AirplaneYear::new(value, current_year))
            .transpose()?)
    }
}
