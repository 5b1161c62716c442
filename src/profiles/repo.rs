use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::profiles::dto::ProfilePatch;
use crate::profiles::repo_types::NutritionProfile;

/// Result of applying a partial update inside the repository.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome {
    Patched(NutritionProfile),
    NotFound,
    /// The merged profile failed validation; nothing was written.
    Invalid(ValidationError),
}

/// Persistence boundary for nutrition profiles. Lookups are scoped by owner:
/// a profile belonging to another user behaves as if it did not exist.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn insert(&self, record: NutritionProfile) -> anyhow::Result<()>;
    async fn find(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<NutritionProfile>>;
    /// Returns `false` when no profile with that id exists for the owner.
    async fn update(&self, record: NutritionProfile) -> anyhow::Result<bool>;
    /// Merges `patch` into the stored profile, validates the result and
    /// stamps `updated_at` as one step, so concurrent patches to different
    /// fields never overwrite each other.
    async fn patch(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: ProfilePatch,
        now: OffsetDateTime,
    ) -> anyhow::Result<PatchOutcome>;
    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;
}

#[derive(Default)]
pub struct InMemoryProfileRepository {
    rows: RwLock<HashMap<Uuid, NutritionProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn insert(&self, record: NutritionProfile) -> anyhow::Result<()> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&record.id) {
            anyhow::bail!("profile {} already exists", record.id);
        }
        rows.insert(record.id, record);
        Ok(())
    }

    async fn find(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<Option<NutritionProfile>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).filter(|r| r.user_id == user_id).cloned())
    }

    async fn update(&self, record: NutritionProfile) -> anyhow::Result<bool> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&record.id) {
            Some(row) if row.user_id == record.user_id => {
                *row = record;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn patch(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: ProfilePatch,
        now: OffsetDateTime,
    ) -> anyhow::Result<PatchOutcome> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.get_mut(&id).filter(|r| r.user_id == user_id) else {
            return Ok(PatchOutcome::NotFound);
        };
        match patch.merged(row) {
            Ok(mut next) => {
                next.updated_at = now;
                *row = next.clone();
                Ok(PatchOutcome::Patched(next))
            }
            Err(e) => Ok(PatchOutcome::Invalid(e)),
        }
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.write().await;
        if rows.get(&id).is_some_and(|r| r.user_id == user_id) {
            rows.remove(&id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
