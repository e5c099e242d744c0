use crate::modules::activities::use_cases::apply_decision::decide_and_store;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use crate::shared::infrastructure::activity_registry::ActivityRegistry;
use std::sync::Arc;

pub struct UnregisterFromActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> UnregisterFromActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: UnregisterFromActivity) -> Result<String, ApplicationError> {
        let message = format!("Unregistered {} from {}", command.email, command.activity);
        let activity = command.activity.clone();

        match decide_and_store(&*self.registry, &activity, |state| {
            decide_unregister(state, command.clone())
        })
        .await
        {
            Ok(()) => {
                tracing::info!(%activity, "participant unregistered");
                Ok(message)
            }
            Err(ApplicationError::Domain(reason)) => {
                tracing::warn!(%activity, %reason, "unregister rejected");
                Err(ApplicationError::Domain(reason))
            }
            Err(error) => {
                tracing::error!(%activity, %error, "unregister failed");
                Err(error)
            }
        }
    }
}
