use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::activity_registry::{ActivityRegistry, RegistryError};

/// Loads `name`, runs `decide` against its state and stores the evolved
/// activity under the version that was loaded. A stale version means another
/// request stored first, so the decision is made again on the fresh state.
pub async fn decide_and_store<TRegistry, TDecide>(
    registry: &TRegistry,
    name: &str,
    decide: TDecide,
) -> Result<(), ApplicationError>
where
    TRegistry: ActivityRegistry + ?Sized,
    TDecide: Fn(&ActivityState) -> Decision,
{
    loop {
        let loaded = registry.load(name).await?;
        let state = ActivityState::from(loaded.as_ref().map(|l| l.activity.clone()));

        match decide(&state) {
            Decision::Accepted { events } => {
                let loaded = loaded.ok_or(DecideError::ActivityNotFound)?;
                let next = events.into_iter().fold(loaded.activity, evolve);
                match registry.store(name, loaded.version, next).await {
                    Ok(()) => return Ok(()),
                    Err(RegistryError::VersionMismatch { expected, actual, .. }) => {
                        tracing::debug!(%name, expected, actual, "stale activity version, deciding again");
                    }
                    Err(error) => return Err(error.into()),
                }
            }
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        }
    }
}

#[cfg(test)]
mod decide_and_store_tests {
    use super::*;
    use crate::modules::activities::core::events::ActivityEvent;
    use crate::shared::infrastructure::activity_registry::in_memory::InMemoryActivityRegistry;
    use rstest::rstest;
    use std::sync::Arc;

    fn sign_up(email: &'static str) -> impl Fn(&ActivityState) -> Decision {
        move |state: &ActivityState| match state {
            ActivityState::Unknown => Decision::Rejected {
                reason: DecideError::ActivityNotFound,
            },
            ActivityState::Listed(_) => Decision::Accepted {
                events: vec![ActivityEvent::ParticipantSignedUp {
                    activity: "Chess Club".into(),
                    email: email.into(),
                }],
            },
        }
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn it_should_store_every_concurrent_decision() {
        let registry = Arc::new(InMemoryActivityRegistry::default());
        registry.set_delay_store_ms(5);
        let emails = [
            "s0@example.com",
            "s1@example.com",
            "s2@example.com",
            "s3@example.com",
            "s4@example.com",
            "s5@example.com",
            "s6@example.com",
            "s7@example.com",
        ];

        let tasks: Vec<_> = emails
            .into_iter()
            .map(|email| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    decide_and_store(&*registry, "Chess Club", sign_up(email)).await
                })
            })
            .collect();
        for task in tasks {
            task.await.expect("task panicked").expect("decide_and_store failed");
        }

        let loaded = registry.load("Chess Club").await.unwrap().unwrap();
        assert_eq!(loaded.version, emails.len() as i64);
        for email in emails {
            assert!(loaded.activity.is_signed_up(email), "{email} missing");
        }
    }
}
