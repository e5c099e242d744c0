// In memory implementation of the ActivityRegistry port and the list query.
//
// Every entry carries a version bumped on each store, so two requests racing
// on the same activity cannot overwrite each other's change.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::catalogue::{Activities, default_catalogue};
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::shared::infrastructure::activity_registry::{
    ActivityRegistry, LoadedActivity, RegistryError,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct Entry {
    activity: Activity,
    version: i64,
}

pub struct InMemoryActivityRegistry {
    inner: RwLock<BTreeMap<String, Entry>>,
    is_offline: bool,
    delay_store_ms: AtomicU64,
}

impl InMemoryActivityRegistry {
    pub fn new(activities: Activities) -> Self {
        let entries = activities
            .into_iter()
            .map(|(name, activity)| {
                (
                    name,
                    Entry {
                        activity,
                        version: 0,
                    },
                )
            })
            .collect();
        Self {
            inner: RwLock::new(entries),
            is_offline: false,
            delay_store_ms: AtomicU64::new(0),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_store_ms(&self, ms: u64) {
        self.delay_store_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), RegistryError> {
        if self.is_offline {
            return Err(RegistryError::Backend("Activity registry offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryActivityRegistry {
    fn default() -> Self {
        Self::new(default_catalogue())
    }
}

#[async_trait::async_trait]
impl ActivityRegistry for InMemoryActivityRegistry {
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, RegistryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(name).map(|entry| LoadedActivity {
            activity: entry.activity.clone(),
            version: entry.version,
        }))
    }

    async fn store(
        &self,
        name: &str,
        expected_version: i64,
        activity: Activity,
    ) -> Result<(), RegistryError> {
        self.ensure_online()?;
        let delay = self.delay_store_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        let entry = guard
            .get_mut(name)
            .ok_or_else(|| RegistryError::Missing(name.to_string()))?;
        if entry.version != expected_version {
            return Err(RegistryError::VersionMismatch {
                activity: name.to_string(),
                expected: expected_version,
                actual: entry.version,
            });
        }
        entry.activity = activity;
        entry.version += 1;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityRegistry {
    async fn list_activities(&self) -> anyhow::Result<Activities> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .iter()
            .map(|(name, entry)| (name.clone(), entry.activity.clone()))
            .collect())
    }
}
