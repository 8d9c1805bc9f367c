// src/application/commands/monuments/update.rs
use super::{
    MonumentCommandService,
    service::{optional_name, optional_text},
};
use crate::{
    application::{
        dto::MonumentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        monument::{MonumentId, MonumentName, MonumentSlug, MonumentUpdate},
        slug::SlugLang,
    },
};

/// `None` leaves a field as stored. A blank `name_ar` or `description`
/// clears it.
pub struct UpdateMonumentCommand {
    pub id: i64,
    pub name_en: Option<String>,
    pub name_ar: Option<String>,
    pub description: Option<String>,
    pub slug_en: Option<String>,
    pub slug_ar: Option<String>,
}

impl MonumentCommandService {
    pub async fn update_monument(
        &self,
        command: UpdateMonumentCommand,
    ) -> ApplicationResult<MonumentDto> {
        let id = MonumentId::new(command.id)
            .map_err(|err| ApplicationError::from_route_identifier(err, "monument"))?;
        let current = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("monument not found"))?;

        let name_en = command.name_en.map(MonumentName::new).transpose()?;
        let name_ar = command
            .name_ar
            .map(|name| optional_name(Some(name)))
            .transpose()?;
        let description = command.description.map(|d| optional_text(Some(d)));

        // Only a changed source name triggers regeneration.
        let renamed_en = name_en
            .as_ref()
            .filter(|name| **name != current.name_en)
            .map(Some);
        let renamed_ar = name_ar
            .as_ref()
            .filter(|name| Option::as_ref(*name) != current.name_ar.as_ref())
            .map(Option::as_ref);

        let mut attempt = 1;
        loop {
            let mut update = MonumentUpdate::new(id, self.clock.now());
            if let Some(name) = &name_en {
                update = update.with_name_en(name.clone());
            }
            if let Some(name) = &name_ar {
                update = update.with_name_ar(name.clone());
            }
            if let Some(description) = &description {
                update = update.with_description(description.clone());
            }

            if let Some(slug) = self
                .updated_slug(SlugLang::En, command.slug_en.as_deref(), renamed_en, id)
                .await?
            {
                update = update.with_slug(SlugLang::En, slug);
            }
            if let Some(slug) = self
                .updated_slug(SlugLang::Ar, command.slug_ar.as_deref(), renamed_ar, id)
                .await?
            {
                update = update.with_slug(SlugLang::Ar, slug);
            }

            if update.is_empty() {
                return self.to_dto(current);
            }

            match self.write_repo.update(update).await {
                Ok(updated) => {
                    tracing::info!(%id, attempt, "monument updated");
                    return self.to_dto(updated);
                }
                Err(err) if self.should_retry(&err, attempt) => attempt += 1,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// `None` keeps the stored slug. An override always wins; otherwise the
    /// slug follows a renamed source name (and is cleared with it).
    async fn updated_slug(
        &self,
        lang: SlugLang,
        override_value: Option<&str>,
        renamed: Option<Option<&MonumentName>>,
        id: MonumentId,
    ) -> ApplicationResult<Option<Option<MonumentSlug>>> {
        if self.normalized_override(override_value).is_none() && renamed.is_none() {
            return Ok(None);
        }
        let name = renamed.flatten();
        let slug = self.resolve_slug(lang, override_value, name, Some(id)).await?;
        Ok(Some(slug))
    }
}
