use crate::modules::activities::use_cases::apply_decision::decide_and_store;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::shared::infrastructure::activity_registry::ActivityRegistry;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    registry: Arc<TRegistry>,
}

impl<TRegistry> SignUpForActivityHandler<TRegistry>
where
    TRegistry: ActivityRegistry + 'static,
{
    pub fn new(registry: Arc<TRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the confirmation message shown to the caller.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, ApplicationError> {
        let message = format!("Signed up {} for {}", command.email, command.activity);
        let activity = command.activity.clone();

        match decide_and_store(&*self.registry, &activity, |state| {
            decide_sign_up(state, command.clone())
        })
        .await
        {
            Ok(()) => {
                tracing::info!(%activity, "participant signed up");
                Ok(message)
            }
            Err(ApplicationError::Domain(reason)) => {
                tracing::warn!(%activity, %reason, "sign-up rejected");
                Err(ApplicationError::Domain(reason))
            }
            Err(error) => {
                tracing::error!(%activity, %error, "sign-up failed");
                Err(error)
            }
        }
    }
}
