use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub struct UnregisterFromActivityBuilder {
    inner: UnregisterFromActivity,
}

impl Default for UnregisterFromActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UnregisterFromActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: UnregisterFromActivity {
                activity: "Chess Club".to_string(),
                email: "test@example.com".to_string(),
            },
        }
    }

    pub fn activity(mut self, v: impl Into<String>) -> Self {
        self.inner.activity = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> UnregisterFromActivity {
        self.inner
    }
}

#[cfg(test)]
mod unregister_from_activity_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = UnregisterFromActivityBuilder::default()
            .activity("Art Club")
            .email("amelia@mergington.edu")
            .build();

        assert_eq!(custom.activity, "Art Club");
        assert_eq!(custom.email, "amelia@mergington.edu");
    }
}
