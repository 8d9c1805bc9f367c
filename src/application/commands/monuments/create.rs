// src/application/commands/monuments/create.rs
use super::{
    MonumentCommandService,
    service::{optional_name, optional_text},
};
use crate::{
    application::{dto::MonumentDto, error::ApplicationResult},
    domain::{
        monument::{MonumentName, NewMonument},
        slug::SlugLang,
    },
};

pub struct CreateMonumentCommand {
    pub name_en: String,
    pub name_ar: Option<String>,
    pub description: Option<String>,
    /// Explicit slugs skip generation but are still normalised and made unique.
    pub slug_en: Option<String>,
    pub slug_ar: Option<String>,
}

impl CreateMonumentCommand {
    pub fn builder() -> CreateMonumentCommandBuilder {
        CreateMonumentCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateMonumentCommandBuilder {
    name_en: Option<String>,
    name_ar: Option<String>,
    description: Option<String>,
    slug_en: Option<String>,
    slug_ar: Option<String>,
}

impl CreateMonumentCommandBuilder {
    pub fn name_en(mut self, name: impl Into<String>) -> Self {
        self.name_en = Some(name.into());
        self
    }

    pub fn name_ar(mut self, name: impl Into<String>) -> Self {
        self.name_ar = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn slug_en(mut self, slug: impl Into<String>) -> Self {
        self.slug_en = Some(slug.into());
        self
    }

    pub fn slug_ar(mut self, slug: impl Into<String>) -> Self {
        self.slug_ar = Some(slug.into());
        self
    }

    pub fn build(self) -> Result<CreateMonumentCommand, &'static str> {
        Ok(CreateMonumentCommand {
            name_en: self.name_en.ok_or("name_en is required")?,
            name_ar: self.name_ar,
            description: self.description,
            slug_en: self.slug_en,
            slug_ar: self.slug_ar,
        })
    }
}

impl MonumentCommandService {
    pub async fn create_monument(
        &self,
        command: CreateMonumentCommand,
    ) -> ApplicationResult<MonumentDto> {
        let name_en = MonumentName::new(command.name_en)?;
        let name_ar = optional_name(command.name_ar)?;
        let description = optional_text(command.description);

        let mut attempt = 1;
        loop {
            let slug_en = self
                .resolve_slug(SlugLang::En, command.slug_en.as_deref(), Some(&name_en), None)
                .await?;
            let slug_ar = self
                .resolve_slug(SlugLang::Ar, command.slug_ar.as_deref(), name_ar.as_ref(), None)
                .await?;

            let now = self.clock.now();
            let new_monument = NewMonument {
                name_en: name_en.clone(),
                name_ar: name_ar.clone(),
                description: description.clone(),
                slug_en,
                slug_ar,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_monument).await {
                Ok(created) => {
                    tracing::info!(id = %created.id, attempt, "monument created");
                    return self.to_dto(created);
                }
                Err(err) if self.should_retry(&err, attempt) => attempt += 1,
                Err(err) => return Err(err.into()),
            }
        }
    }
}
