use crate::modules::activities::core::activity::Activity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityState {
    Unknown,
    Listed(Activity),
}

impl From<Option<Activity>> for ActivityState {
    fn from(activity: Option<Activity>) -> Self {
        activity.map_or(ActivityState::Unknown, ActivityState::Listed)
    }
}
