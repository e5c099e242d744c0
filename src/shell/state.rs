use crate::modules::activities::core::catalogue::Activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::shared::infrastructure::activity_registry::in_memory::InMemoryActivityRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryActivityRegistry>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryActivityRegistry>>,
}

impl AppState {
    pub fn in_memory(activities: Activities) -> Self {
        Self::from_registry(InMemoryActivityRegistry::new(activities))
    }

    pub fn from_registry(registry: InMemoryActivityRegistry) -> Self {
        let registry = Arc::new(registry);
        Self {
            queries: registry.clone(),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(registry.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(registry)),
        }
    }
}
