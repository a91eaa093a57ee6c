// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{airplanes::AirplaneCommandService, manufacturers::ManufacturerCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            airplanes::AirplaneQueryService, manufacturers::ManufacturerQueryService,
            search::SearchQueryService,
        },
    },
    domain::{
        airplane::AirplaneRepository,
        manufacturer::{ManufacturerRepository, ManufacturerResolver},
        slug::SlugDeriver,
    },
};

pub struct ApplicationServices {
    pub airplane_commands: Arc<AirplaneCommandService>,
    pub airplane_queries: Arc<AirplaneQueryService>,
    pub manufacturer_commands: Arc<ManufacturerCommandService>,
    pub manufacturer_queries: Arc<ManufacturerQueryService>,
    pub search: Arc<SearchQueryService>,
}

impl ApplicationServices {
    pub fn new(
        airplane_repo: Arc<dyn AirplaneRepository>,
        manufacturer_repo: Arc<dyn ManufacturerRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let deriver = Arc::new(SlugDeriver::new(Arc::clone(&slugger)));
        let resolver = Arc::new(ManufacturerResolver::new(
            Arc::clone(&manufacturer_repo),
            Arc::clone(&deriver),
        ));

        let airplane_commands = Arc::new(AirplaneCommandService::new(
            Arc::clone(&airplane_repo),
            Arc::clone(&resolver),
            Arc::clone(&deriver),
            Arc::clone(&clock),
        ));
        let manufacturer_commands = Arc::new(ManufacturerCommandService::new(
            Arc::clone(&manufacturer_repo),
            Arc::clone(&resolver),
            Arc::clone(&deriver),
            Arc::clone(&clock),
        ));

        let airplane_queries = Arc::new(AirplaneQueryService::new(Arc::clone(&airplane_repo)));
        let manufacturer_queries =
            Arc::new(ManufacturerQueryService::new(Arc::clone(&manufacturer_repo)));
        let search = Arc::new(SearchQueryService::new(
            Arc::clone(&airplane_repo),
            Arc::clone(&manufacturer_repo),
        ));

        Self {
            airplane_commands,
            airplane_queries,
            manufacturer_commands,
            manufacturer_queries,
            search,
        }
    }
}
