use crate::modules::activities::core::catalogue::default_catalogue;
use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::shared::infrastructure::activity_registry::in_memory::InMemoryActivityRegistry;
use crate::tests::fixtures::commands::sign_up_for_activity::SignUpForActivityBuilder;
use crate::tests::fixtures::commands::unregister_from_activity::UnregisterFromActivityBuilder;
use std::sync::Arc;

#[tokio::test]
async fn signs_up_lists_and_unregisters_participants() {
    let registry = Arc::new(InMemoryActivityRegistry::new(default_catalogue()));
    let sign_up = SignUpForActivityHandler::new(registry.clone());
    let unregister = UnregisterFromActivityHandler::new(registry.clone());

    let emails = ["a@example.com", "b@example.com", "c@example.com"];
    for email in emails {
        sign_up
            .handle(
                SignUpForActivityBuilder::new()
                    .activity("Math Club")
                    .email(email)
                    .build(),
            )
            .await
            .unwrap();
    }

    unregister
        .handle(
            UnregisterFromActivityBuilder::new()
                .activity("Math Club")
                .email("b@example.com")
                .build(),
        )
        .await
        .unwrap();

    let listed = registry.list_activities().await.unwrap();
    let math = &listed["Math Club"];
    assert_eq!(
        math.participants,
        vec![
            "james@mergington.edu",
            "benjamin@mergington.edu",
            "a@example.com",
            "c@example.com",
        ]
    );

    // Other activities are untouched.
    assert_eq!(listed["Chess Club"], default_catalogue()["Chess Club"]);

    let again = unregister
        .handle(
            UnregisterFromActivityBuilder::new()
                .activity("Math Club")
                .email("b@example.com")
                .build(),
        )
        .await;
    assert!(matches!(
        again,
        Err(ApplicationError::Domain(DecideError::NotSignedUp))
    ));
}

#[tokio::test]
async fn signs_up_the_same_email_for_different_activities() {
    let registry = Arc::new(InMemoryActivityRegistry::new(default_catalogue()));
    let sign_up = SignUpForActivityHandler::new(registry.clone());

    for activity in ["Chess Club", "Art Club"] {
        sign_up
            .handle(
                SignUpForActivityBuilder::new()
                    .activity(activity)
                    .email("both@example.com")
                    .build(),
            )
            .await
            .unwrap();
    }

    let listed = registry.list_activities().await.unwrap();
    assert!(listed["Chess Club"].is_signed_up("both@example.com"));
    assert!(listed["Art Club"].is_signed_up("both@example.com"));
}
