use crate::modules::activities::core::{
    decision::{DecideError, Decision},
    events::ActivityEvent,
    state::ActivityState,
};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(state: &ActivityState, command: UnregisterFromActivity) -> Decision {
    match state {
        ActivityState::Unknown => Decision::Rejected {
            reason: DecideError::ActivityNotFound,
        },
        ActivityState::Listed(activity) if !activity.is_signed_up(&command.email) => {
            Decision::Rejected {
                reason: DecideError::NotSignedUp,
            }
        }
        ActivityState::Listed(_) => Decision::Accepted {
            events: vec![ActivityEvent::ParticipantUnregistered {
                activity: command.activity,
                email: command.email,
            }],
        },
    }
}
