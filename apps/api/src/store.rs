//! Analysis history storage.
//!
//! `AppState` holds an `Arc<dyn AnalysisStore>`; the default backend keeps a
//! size-capped, most-recent-first history and a single "current" slot in memory.

use std::collections::{BTreeMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::readiness::SkillConfidence;
use crate::errors::AppError;
use crate::models::analysis::Analysis;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// History, most recent first.
    async fn list(&self) -> Result<Vec<Analysis>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<Analysis>, AppError>;
    /// Prepends to history, evicting the oldest entries past the cap.
    async fn save(&self, analysis: Analysis) -> Result<(), AppError>;
    /// Replaces the entry with the same id. Returns false if it is not in history.
    async fn update(&self, analysis: Analysis) -> Result<bool, AppError>;
    /// Merges confidence marks into the stored entry and refreshes current, as
    /// one read-modify-write. Returns the updated entry, or None if it is not in history.
    async fn apply_confidence(
        &self,
        id: Uuid,
        updates: &BTreeMap<String, SkillConfidence>,
    ) -> Result<Option<Analysis>, AppError>;
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
    async fn clear(&self) -> Result<(), AppError>;
    async fn current(&self) -> Result<Option<Analysis>, AppError>;
    async fn set_current(&self, analysis: Analysis) -> Result<(), AppError>;
    async fn clear_current(&self) -> Result<(), AppError>;
}

#[derive(Default)]
struct StoreInner {
    history: VecDeque<Analysis>,
    current: Option<Analysis>,
}

pub struct InMemoryAnalysisStore {
    inner: RwLock<StoreInner>,
    limit: usize,
}

impl InMemoryAnalysisStore {
    pub fn new(limit: usize) -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            limit,
        }
    }
}

impl Default for InMemoryAnalysisStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[async_trait]
impl AnalysisStore for InMemoryAnalysisStore {
    async fn list(&self) -> Result<Vec<Analysis>, AppError> {
        Ok(self.inner.read().await.history.iter().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Analysis>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.history.iter().find(|a| a.id == id).cloned())
    }

    async fn save(&self, analysis: Analysis) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        inner.history.push_front(analysis);
        if inner.history.len() > self.limit {
            let evicted = inner.history.len() - self.limit;
            inner.history.truncate(self.limit);
            debug!(evicted, limit = self.limit, "Trimmed analysis history");
        }
        Ok(())
    }

    async fn update(&self, analysis: Analysis) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let Some(slot) = inner.history.iter_mut().find(|a| a.id == analysis.id) else {
            return Ok(false);
        };
        *slot = analysis.clone();
        if inner.current.as_ref().is_some_and(|c| c.id == analysis.id) {
            inner.current = Some(analysis);
        }
        Ok(true)
    }

    async fn apply_confidence(
        &self,
        id: Uuid,
        updates: &BTreeMap<String, SkillConfidence>,
    ) -> Result<Option<Analysis>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(slot) = inner.history.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        slot.apply_confidence(updates);
        let updated = slot.clone();
        if inner.current.as_ref().is_some_and(|c| c.id == id) {
            inner.current = Some(updated.clone());
        }
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.history.len();
        inner.history.retain(|a| a.id != id);
        Ok(inner.history.len() != before)
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let removed = inner.history.len();
        inner.history.clear();
        info!(removed, "Cleared analysis history");
        Ok(())
    }

    async fn current(&self) -> Result<Option<Analysis>, AppError> {
        Ok(self.inner.read().await.current.clone())
    }

    async fn set_current(&self, analysis: Analysis) -> Result<(), AppError> {
        self.inner.write().await.current = Some(analysis);
        Ok(())
    }

    async fn clear_current(&self) -> Result<(), AppError> {
        self.inner.write().await.current = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::assembler::analyze;

    #[tokio::test]
    async fn test_save_prepends_most_recent_first() {
        let store = InMemoryAnalysisStore::default();
        let first = analyze("", "", "Java");
        let second = analyze("", "", "Python");
        store.save(first.clone()).await.unwrap();
        store.save(second.clone()).await.unwrap();

        let history = store.list().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);
    }

    #[tokio::test]
    async fn test_history_is_capped_dropping_oldest() {
        let store = InMemoryAnalysisStore::new(3);
        let mut ids = Vec::new();
        for _ in 0..5 {
            let a = analyze("", "", "Java");
            ids.push(a.id);
            store.save(a).await.unwrap();
        }
        let history = store.list().await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].id, ids[4]);
        assert!(store.get(ids[0]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_default_cap_is_fifty() {
        let store = InMemoryAnalysisStore::default();
        for _ in 0..55 {
            store.save(analyze("", "", "Java")).await.unwrap();
        }
        assert_eq!(store.list().await.unwrap().len(), DEFAULT_HISTORY_LIMIT);
    }

    #[tokio::test]
    async fn test_update_refreshes_current_with_same_id() {
        let store = InMemoryAnalysisStore::default();
        let mut analysis = analyze("", "", "Java");
        store.save(analysis.clone()).await.unwrap();
        store.set_current(analysis.clone()).await.unwrap();

        analysis.adjusted_readiness_score = Some(99);
        assert!(store.update(analysis.clone()).await.unwrap());

        let current = store.current().await.unwrap().unwrap();
        assert_eq!(current.adjusted_readiness_score, Some(99));
        let stored = store.get(analysis.id).await.unwrap().unwrap();
        assert_eq!(stored.adjusted_readiness_score, Some(99));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_confidence_marks_all_survive() {
        let store = Arc::new(InMemoryAnalysisStore::default());
        let analysis = analyze("", "", "DSA, OOP, DBMS, Java, Python, Go, React, SQL, Docker, AWS, Jest");
        let labels: Vec<String> = analysis.extracted_skills.all_skills().map(String::from).collect();
        assert!(labels.len() > 5);
        store.save(analysis.clone()).await.unwrap();
        store.set_current(analysis.clone()).await.unwrap();

        let tasks: Vec<_> = labels
            .iter()
            .cloned()
            .map(|label| {
                let store = Arc::clone(&store);
                let id = analysis.id;
                tokio::spawn(async move {
                    let marks = BTreeMap::from([(label, SkillConfidence::Know)]);
                    store.apply_confidence(id, &marks).await.unwrap()
                })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().is_some());
        }

        let stored = store.get(analysis.id).await.unwrap().unwrap();
        for label in &labels {
            assert_eq!(stored.confidence_for(label), SkillConfidence::Know);
        }
        let expected = (analysis.readiness_score + 2 * labels.len() as u32).min(100);
        assert_eq!(stored.adjusted_readiness_score, Some(expected));

        let current = store.current().await.unwrap().unwrap();
        assert_eq!(current.skill_confidence_map, stored.skill_confidence_map);
    }

    #[tokio::test]
    async fn test_apply_confidence_missing_returns_none() {
        let store = InMemoryAnalysisStore::default();
        let marks = BTreeMap::from([("Java".to_string(), SkillConfidence::Know)]);
        assert!(store.apply_confidence(Uuid::now_v7(), &marks).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_returns_false() {
        let store = InMemoryAnalysisStore::default();
        assert!(!store.update(analyze("", "", "Java")).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let store = InMemoryAnalysisStore::default();
        let a = analyze("", "", "Java");
        let b = analyze("", "", "Python");
        store.save(a.clone()).await.unwrap();
        store.save(b.clone()).await.unwrap();

        assert!(store.delete(a.id).await.unwrap());
        assert!(!store.delete(a.id).await.unwrap());
        assert_eq!(store.list().await.unwrap().len(), 1);

        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_current_slot_lifecycle() {
        let store = InMemoryAnalysisStore::default();
        assert!(store.current().await.unwrap().is_none());
        let a = analyze("", "", "Java");
        store.set_current(a.clone()).await.unwrap();
        assert_eq!(store.current().await.unwrap().map(|c| c.id), Some(a.id));
        store.clear_current().await.unwrap();
        assert!(store.current().await.unwrap().is_none());
    }
}
