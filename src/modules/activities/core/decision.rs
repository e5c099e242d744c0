use crate::modules::activities::core::events::ActivityEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { events: Vec<ActivityEvent> },
    Rejected { reason: DecideError },
}
