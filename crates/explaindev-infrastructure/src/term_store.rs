//! Term store implementation.
//!
//! The collection is loaded lazily on first access, from the durable
//! snapshot or from the built-in seed. Mutations build the next collection,
//! persist it, and only then replace the in-memory copy.

use async_trait::async_trait;
use chrono::Utc;
use explaindev_core::config::{GlossaryConfig, TermSettings};
use explaindev_core::error::{GlossaryError, Result};
use explaindev_core::storage::{KeyValueStorage, TERMS_KEY};
use explaindev_core::term::{NewTerm, Term, TermPatch, TermStore, seed_terms};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::dto::TermCodec;

/// Term store persisted as one snapshot under [`TERMS_KEY`].
///
/// All operations serialize on one lock, held across the simulated delay,
/// so a mutation always sees the effect of the previous one.
pub struct TermStoreImpl {
    storage: Arc<dyn KeyValueStorage>,
    codec: TermCodec,
    settings: TermSettings,
    mutation_latency: Duration,
    /// `None` until the first access hydrates it
    terms: Mutex<Option<Vec<Term>>>,
}

impl TermStoreImpl {
    pub fn new(storage: Arc<dyn KeyValueStorage>, config: &GlossaryConfig) -> Self {
        Self {
            storage,
            codec: TermCodec::new(),
            settings: config.terms.clone(),
            mutation_latency: config.latency.term_mutation(),
            terms: Mutex::new(None),
        }
    }

    /// Returns the hydrated collection, loading it on first use.
    async fn hydrate<'a>(&self, slot: &'a mut Option<Vec<Term>>) -> Result<&'a mut Vec<Term>> {
        let terms = match slot.take() {
            Some(terms) => terms,
            None => self.load_collection().await?,
        };
        Ok(slot.insert(terms))
    }

    async fn load_collection(&self) -> Result<Vec<Term>> {
        match self.storage.load(TERMS_KEY).await? {
            Some(bytes) => {
                let terms = self.codec.decode(&bytes)?;
                tracing::debug!("[TermStore] Loaded {} terms from storage", terms.len());
                Ok(terms)
            }
            None => {
                let seed = seed_terms()?;
                self.persist(&seed).await?;
                tracing::info!("[TermStore] Seeded storage with {} terms", seed.len());
                Ok(seed)
            }
        }
    }

    async fn persist(&self, terms: &[Term]) -> Result<()> {
        let bytes = self.codec.encode(terms)?;
        self.storage.save(TERMS_KEY, &bytes).await
    }

    async fn simulate_latency(&self) {
        if !self.mutation_latency.is_zero() {
            tokio::time::sleep(self.mutation_latency).await;
        }
    }

    /// Fails if a term other than `own_id` already uses `slug`.
    ///
    /// An empty slug is never checked; partial entries are stored as given.
    fn check_slug_available(&self, terms: &[Term], slug: &str, own_id: Option<&str>) -> Result<()> {
        if !self.settings.enforce_unique_slugs || slug.is_empty() {
            return Ok(());
        }

        match terms
            .iter()
            .find(|t| t.slug == slug && Some(t.id.as_str()) != own_id)
        {
            Some(existing) => Err(GlossaryError::duplicate_slug(slug, existing.id.clone())),
            None => Ok(()),
        }
    }
}

/// A fresh identifier that no term in `terms` carries.
fn generate_id(terms: &[Term]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !terms.iter().any(|t| t.id == id) {
            return id;
        }
    }
}

#[async_trait]
impl TermStore for TermStoreImpl {
    async fn is_loaded(&self) -> bool {
        self.terms.lock().await.is_some()
    }

    async fn terms(&self) -> Result<Vec<Term>> {
        let mut slot = self.terms.lock().await;
        Ok(self.hydrate(&mut slot).await?.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Term>> {
        let mut slot = self.terms.lock().await;
        let terms = self.hydrate(&mut slot).await?;
        Ok(terms.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Term>> {
        let mut slot = self.terms.lock().await;
        let terms = self.hydrate(&mut slot).await?;
        Ok(terms.iter().find(|t| t.slug == slug).cloned())
    }

    async fn add_term(&self, data: NewTerm) -> Result<Term> {
        let mut slot = self.terms.lock().await;
        self.simulate_latency().await;
        let terms = self.hydrate(&mut slot).await?;

        self.check_slug_available(terms, &data.slug, None)?;

        let term = Term::from_new(generate_id(terms), data, Utc::now());
        let mut next = terms.clone();
        next.push(term.clone());

        self.persist(&next).await?;
        *terms = next;

        tracing::info!("[TermStore] Added term '{}' ({})", term.name, term.id);
        Ok(term)
    }

    async fn update_term(&self, id: &str, patch: TermPatch) -> Result<Term> {
        let mut slot = self.terms.lock().await;
        self.simulate_latency().await;
        let terms = self.hydrate(&mut slot).await?;

        let index = terms
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| GlossaryError::not_found("term", id))?;

        if let Some(slug) = patch.slug.as_deref() {
            self.check_slug_available(terms, slug, Some(id))?;
        }

        let mut next = terms.clone();
        next[index].apply_patch(patch, Utc::now());
        let updated = next[index].clone();

        self.persist(&next).await?;
        *terms = next;

        tracing::info!("[TermStore] Updated term '{}' ({})", updated.name, updated.id);
        Ok(updated)
    }

    async fn delete_term(&self, id: &str) -> Result<()> {
        let mut slot = self.terms.lock().await;
        self.simulate_latency().await;
        let terms = self.hydrate(&mut slot).await?;

        if !terms.iter().any(|t| t.id == id) {
            tracing::debug!("[TermStore] Delete of unknown term '{}' ignored", id);
            return Ok(());
        }

        let next: Vec<Term> = terms.iter().filter(|t| t.id != id).cloned().collect();

        self.persist(&next).await?;
        *terms = next;

        tracing::info!("[TermStore] Deleted term {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStorage;
    use explaindev_core::config::LatencySettings;
    use explaindev_core::term::Resource;

    fn create_test_store() -> (TermStoreImpl, Arc<InMemoryStorage>) {
        let storage = Arc::new(InMemoryStorage::new());
        let store = TermStoreImpl::new(storage.clone(), &GlossaryConfig::default());
        (store, storage)
    }

    fn graphql() -> NewTerm {
        NewTerm {
            name: "GraphQL".to_string(),
            slug: "graphql".to_string(),
            category: "backend".to_string(),
            short_description: "A query language for APIs".to_string(),
            tags: vec!["api".to_string(), "query".to_string()],
            created_by: "1".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_first_access_seeds_and_persists() {
        let (store, storage) = create_test_store();
        assert!(!store.is_loaded().await);
        assert!(storage.snapshot(TERMS_KEY).await.is_none());

        let terms = store.terms().await.unwrap();

        assert!(store.is_loaded().await);
        assert_eq!(terms, seed_terms().unwrap());
        assert!(storage.snapshot(TERMS_KEY).await.is_some());
    }

    #[tokio::test]
    async fn test_existing_snapshot_adopted_verbatim() {
        let codec = TermCodec::new();
        let mut stored = seed_terms().unwrap();
        stored.truncate(2);
        let storage = Arc::new(InMemoryStorage::with_entries([(
            TERMS_KEY,
            codec.encode(&stored).unwrap(),
        )]));

        let store = TermStoreImpl::new(storage, &GlossaryConfig::default());

        assert_eq!(store.terms().await.unwrap(), stored);
    }

    #[tokio::test]
    async fn test_add_term_appends() {
        let (store, _storage) = create_test_store();
        let before = store.terms().await.unwrap().len();

        let added = store.add_term(graphql()).await.unwrap();

        let terms = store.terms().await.unwrap();
        assert_eq!(terms.len(), before + 1);
        assert_eq!(terms.last().unwrap().id, added.id);
        assert!(added.updated_at.is_none());
        assert_eq!(store.find_by_id(&added.id).await.unwrap(), Some(added));
    }

    #[tokio::test]
    async fn test_add_partial_term_is_stored_as_is() {
        let (store, _storage) = create_test_store();

        let added = store
            .add_term(NewTerm {
                name: "Half".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(added.name, "Half");
        assert_eq!(added.slug, "");
        assert!(added.tags.is_empty());
    }

    #[tokio::test]
    async fn test_add_several_terms_without_slug() {
        let (store, _storage) = create_test_store();
        let before = store.terms().await.unwrap().len();

        for name in ["A", "B"] {
            store
                .add_term(NewTerm {
                    name: name.to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let cleared = store
            .update_term(
                "1",
                TermPatch {
                    slug: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(cleared.slug, "");
        assert_eq!(store.terms().await.unwrap().len(), before + 2);
    }

    #[tokio::test]
    async fn test_add_rejects_duplicate_slug() {
        let (store, storage) = create_test_store();
        store.terms().await.unwrap();
        let snapshot = storage.snapshot(TERMS_KEY).await;

        let mut dup = graphql();
        dup.slug = "docker".to_string();
        let err = store.add_term(dup).await.unwrap_err();

        assert_eq!(err, GlossaryError::duplicate_slug("docker", "4"));
        assert_eq!(store.terms().await.unwrap().len(), 5);
        assert_eq!(storage.snapshot(TERMS_KEY).await, snapshot);
    }

    #[tokio::test]
    async fn test_duplicate_slug_allowed_when_not_enforced() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut config = GlossaryConfig::default();
        config.terms.enforce_unique_slugs = false;
        let store = TermStoreImpl::new(storage, &config);

        let mut dup = graphql();
        dup.slug = "docker".to_string();
        store.add_term(dup).await.unwrap();

        // Lookup resolves to the first match
        let found = store.find_by_slug("docker").await.unwrap().unwrap();
        assert_eq!(found.id, "4");
    }

    #[tokio::test]
    async fn test_update_unknown_id_changes_nothing() {
        let (store, storage) = create_test_store();
        let before = store.terms().await.unwrap();
        let snapshot = storage.snapshot(TERMS_KEY).await;

        let err = store
            .update_term(
                "missing",
                TermPatch {
                    name: Some("x".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.terms().await.unwrap(), before);
        assert_eq!(storage.snapshot(TERMS_KEY).await, snapshot);
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let (store, _storage) = create_test_store();
        let original = store.find_by_id("2").await.unwrap().unwrap();

        let resources = vec![Resource {
            title: "React docs".to_string(),
            url: "https://react.dev/reference/react".to_string(),
            description: None,
        }];
        let updated = store
            .update_term(
                "2",
                TermPatch {
                    short_description: Some("Stateful functions for components".to_string()),
                    resources: Some(resources.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.short_description, "Stateful functions for components");
        assert_eq!(updated.resources, resources);
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.slug, original.slug);
        assert_eq!(updated.analogy, original.analogy);
        assert_eq!(updated.code_example, original.code_example);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at.unwrap() > original.created_at);
    }

    #[tokio::test]
    async fn test_update_timestamps_strictly_increase() {
        let (store, _storage) = create_test_store();

        let first = store.update_term("3", TermPatch::default()).await.unwrap();
        let second = store.update_term("3", TermPatch::default()).await.unwrap();

        assert!(second.updated_at.unwrap() > first.updated_at.unwrap());
    }

    #[tokio::test]
    async fn test_update_may_keep_own_slug() {
        let (store, _storage) = create_test_store();

        let updated = store
            .update_term(
                "4",
                TermPatch {
                    slug: Some("docker".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.slug, "docker");

        let err = store
            .update_term(
                "4",
                TermPatch {
                    slug: Some("websockets".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_duplicate_slug());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let (store, storage) = create_test_store();
        let before = store.terms().await.unwrap();
        storage.set_fail_writes(true);

        // No write happens, so the failing storage is never reached
        store.delete_term("missing").await.unwrap();

        assert_eq!(store.terms().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_term() {
        let (store, _storage) = create_test_store();

        store.delete_term("1").await.unwrap();

        let terms = store.terms().await.unwrap();
        assert_eq!(terms.len(), 4);
        assert!(store.find_by_slug("rest-api").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_memory_in_sync() {
        let (store, storage) = create_test_store();
        let before = store.terms().await.unwrap();
        storage.set_fail_writes(true);

        let err = store.add_term(graphql()).await.unwrap_err();
        assert!(err.is_storage());
        let err = store.delete_term("1").await.unwrap_err();
        assert!(err.is_storage());

        assert_eq!(store.terms().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_seed_write_failure_surfaces() {
        let storage = Arc::new(InMemoryStorage::new());
        storage.set_fail_writes(true);
        let store = TermStoreImpl::new(storage, &GlossaryConfig::default());

        assert!(store.terms().await.unwrap_err().is_storage());
        assert!(!store.is_loaded().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mutations_wait_for_latency() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut config = GlossaryConfig::default();
        config.latency = LatencySettings::simulated();
        let delay = config.latency.term_mutation();
        let store = TermStoreImpl::new(storage, &config);
        store.terms().await.unwrap();

        let started = tokio::time::Instant::now();
        let added = store.add_term(graphql()).await.unwrap();
        assert!(started.elapsed() >= delay);

        let started = tokio::time::Instant::now();
        store
            .update_term(&added.id, TermPatch::default())
            .await
            .unwrap();
        assert!(started.elapsed() >= delay);

        let started = tokio::time::Instant::now();
        store.delete_term(&added.id).await.unwrap();
        assert!(started.elapsed() >= delay);
    }
}
