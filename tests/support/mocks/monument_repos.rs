// tests/support/mocks/monument_repos.rs
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use heritage_core::domain::errors::{DomainError, DomainResult};
use heritage_core::domain::monument::{
    Monument, MonumentId, MonumentName, MonumentReadRepository, MonumentSlug, MonumentUpdate,
    MonumentWriteRepository, NewMonument,
};
use heritage_core::domain::slug::SlugLang;

use super::time::fixed_now;

/* -------------------------------- InMemoryMonumentStore -------------------------------- */

#[derive(Default)]
struct StoreState {
    rows: BTreeMap<i64, Monument>,
    last_id: i64,
}

/// Both repository traits over one map. Writes enforce per-language slug
/// uniqueness the way the SQLite unique indexes do.
#[derive(Default)]
pub struct InMemoryMonumentStore {
    state: Mutex<StoreState>,
    slug_lookups: AtomicUsize,
}

impl InMemoryMonumentStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of `find_slug_holder` calls so far.
    pub fn slug_lookups(&self) -> usize {
        self.slug_lookups.load(Ordering::SeqCst)
    }

    /// Inserts a row directly, bypassing the uniqueness check.
    pub fn seed(&self, name_en: &str, slug_en: Option<&str>, slug_ar: Option<&str>) -> MonumentId {
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let raw_id = state.last_id;
        let id = MonumentId::new(raw_id).unwrap();
        state.rows.insert(
            raw_id,
            Monument {
                id,
                name_en: MonumentName::new(name_en).unwrap(),
                name_ar: None,
                description: None,
                slug_en: slug_en.map(|s| MonumentSlug::new(s).unwrap()),
                slug_ar: slug_ar.map(|s| MonumentSlug::new(s).unwrap()),
                created_at: fixed_now(),
                updated_at: fixed_now(),
            },
        );
        id
    }

    pub fn get(&self, id: MonumentId) -> Option<Monument> {
        let state = self.state.lock().unwrap();
        state.rows.get(&i64::from(id)).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    fn holder(
        state: &StoreState,
        lang: SlugLang,
        slug: &str,
        exclude: Option<MonumentId>,
    ) -> Option<MonumentId> {
        state
            .rows
            .values()
            .filter(|m| Some(m.id) != exclude)
            .find(|m| m.slug(lang).is_some_and(|s| s.as_str() == slug))
            .map(|m| m.id)
    }

    fn ensure_free(
        state: &StoreState,
        candidate: &Monument,
        exclude: Option<MonumentId>,
    ) -> DomainResult<()> {
        for lang in SlugLang::ALL {
            if let Some(slug) = candidate.slug(lang) {
                if Self::holder(state, lang, slug.as_str(), exclude).is_some() {
                    return Err(DomainError::SlugConflict(lang));
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl MonumentWriteRepository for InMemoryMonumentStore {
    async fn insert(&self, new: NewMonument) -> DomainResult<Monument> {
        let mut state = self.state.lock().unwrap();
        let id = MonumentId::new(state.last_id + 1)?;
        let monument = Monument {
            id,
            name_en: new.name_en,
            name_ar: new.name_ar,
            description: new.description,
            slug_en: new.slug_en,
            slug_ar: new.slug_ar,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        Self::ensure_free(&state, &monument, None)?;
        state.last_id += 1;
        state.rows.insert(i64::from(id), monument.clone());
        Ok(monument)
    }

    async fn update(&self, update: MonumentUpdate) -> DomainResult<Monument> {
        let mut state = self.state.lock().unwrap();
        let mut monument = state
            .rows
            .get(&i64::from(update.id))
            .cloned()
            .ok_or_else(|| DomainError::NotFound("monument not found".into()))?;

        if let Some(name) = update.name_en {
            monument.name_en = name;
        }
        if let Some(name) = update.name_ar {
            monument.name_ar = name;
        }
        if let Some(description) = update.description {
            monument.description = description;
        }
        if let Some(slug) = update.slug_en {
            monument.slug_en = slug;
        }
        if let Some(slug) = update.slug_ar {
            monument.slug_ar = slug;
        }
        monument.updated_at = update.updated_at;

        Self::ensure_free(&state, &monument, Some(monument.id))?;
        state.rows.insert(i64::from(monument.id), monument.clone());
        Ok(monument)
    }

    async fn delete(&self, id: MonumentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("monument not found".into()))
    }
}

#[async_trait]
impl MonumentReadRepository for InMemoryMonumentStore {
    async fn find_by_id(&self, id: MonumentId) -> DomainResult<Option<Monument>> {
        Ok(self.get(id))
    }

    async fn find_slug_holder(
        &self,
        lang: SlugLang,
        slug: &str,
        exclude: Option<MonumentId>,
    ) -> DomainResult<Option<MonumentId>> {
        self.slug_lookups.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(Self::holder(&state, lang, slug, exclude))
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Monument>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.values().take(limit as usize).cloned().collect())
    }
}

/* -------------------------------- RacingWriter -------------------------------- */

/// On its first write, lets a competing monument claim the English slug that
/// was just resolved, as a concurrent request would between check and write.
pub struct RacingWriter {
    store: Arc<InMemoryMonumentStore>,
    raced: AtomicBool,
}

impl RacingWriter {
    pub fn new(store: Arc<InMemoryMonumentStore>) -> Arc<Self> {
        Arc::new(Self {
            store,
            raced: AtomicBool::new(false),
        })
    }

    fn race(&self, slug_en: Option<&MonumentSlug>) {
        if self.raced.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(slug) = slug_en {
            self.store.seed("Competitor", Some(slug.as_str()), None);
        }
    }
}

#[async_trait]
impl MonumentWriteRepository for RacingWriter {
    async fn insert(&self, new: NewMonument) -> DomainResult<Monument> {
        self.race(new.slug_en.as_ref());
        self.store.insert(new).await
    }

    async fn update(&self, update: MonumentUpdate) -> DomainResult<Monument> {
        self.race(update.slug_en.as_ref().and_then(Option::as_ref));
        self.store.update(update).await
    }

    async fn delete(&self, id: MonumentId) -> DomainResult<()> {
        self.store.delete(id).await
    }
}

/* -------------------------------- AlwaysTakenRead -------------------------------- */

/// Reports every slug as held by someone else.
pub struct AlwaysTakenRead {
    lookups: AtomicUsize,
}

impl AlwaysTakenRead {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            lookups: AtomicUsize::new(0),
        })
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MonumentReadRepository for AlwaysTakenRead {
    async fn find_by_id(&self, _id: MonumentId) -> DomainResult<Option<Monument>> {
        Ok(None)
    }

    async fn find_slug_holder(
        &self,
        _lang: SlugLang,
        _slug: &str,
        _exclude: Option<MonumentId>,
    ) -> DomainResult<Option<MonumentId>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(Some(MonumentId::new(999)?))
    }

    async fn list(&self, _limit: u32) -> DomainResult<Vec<Monument>> {
        Ok(vec![])
    }
}
