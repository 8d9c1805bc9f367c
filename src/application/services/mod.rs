// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::monuments::{MonumentCommandService, MonumentCommandSettings},
        ports::{ClockPort, TransliteratorPort},
        queries::monuments::MonumentQueryService,
    },
    domain::monument::{
        MonumentReadRepository, MonumentSlugService, MonumentWriteRepository, SlugPolicy,
    },
};

/// Runtime knobs for the monument services.
#[derive(Debug, Clone, Default)]
pub struct ServiceSettings {
    pub slug_policy: SlugPolicy,
    pub commands: MonumentCommandSettings,
}

pub struct ApplicationServices {
    pub monument_commands: Arc<MonumentCommandService>,
    pub monument_queries: Arc<MonumentQueryService>,
}

impl ApplicationServices {
    pub fn new(
        monument_write_repo: Arc<dyn MonumentWriteRepository>,
        monument_read_repo: Arc<dyn MonumentReadRepository>,
        transliterator: Arc<TransliteratorPort>,
        clock: Arc<ClockPort>,
        settings: ServiceSettings,
    ) -> Self {
        let slug_service = Arc::new(MonumentSlugService::new(
            Arc::clone(&monument_read_repo),
            Arc::clone(&transliterator),
            settings.slug_policy,
        ));

        let public_base_url = settings.commands.public_base_url.clone();

        let monument_commands = Arc::new(MonumentCommandService::new(
            Arc::clone(&monument_write_repo),
            Arc::clone(&monument_read_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            settings.commands,
        ));

        let monument_queries = Arc::new(MonumentQueryService::new(
            monument_read_repo,
            slug_service,
            public_base_url,
        ));

        Self {
            monument_commands,
            monument_queries,
        }
    }
}
