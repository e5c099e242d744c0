use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("version mismatch for {activity}: expected {expected}, actual {actual}")]
    VersionMismatch {
        activity: String,
        expected: i64,
        actual: i64,
    },

    #[error("activity is not registered: {0}")]
    Missing(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: i64,
}

/// Write side of the activity registry. Activities are seeded up front; the
/// registry only ever replaces existing entries.
#[async_trait]
pub trait ActivityRegistry: Send + Sync {
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, RegistryError>;
    async fn store(
        &self,
        name: &str,
        expected_version: i64,
        activity: Activity,
    ) -> Result<(), RegistryError>;
}

pub mod in_memory;
