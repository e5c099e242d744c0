use crate::modules::activities::core::{
    decision::{DecideError, Decision},
    events::ActivityEvent,
    state::ActivityState,
};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(state: &ActivityState, command: SignUpForActivity) -> Decision {
    match state {
        ActivityState::Unknown => Decision::Rejected {
            reason: DecideError::ActivityNotFound,
        },
        ActivityState::Listed(activity) if activity.is_signed_up(&command.email) => {
            Decision::Rejected {
                reason: DecideError::AlreadySignedUp,
            }
        }
        ActivityState::Listed(_) => Decision::Accepted {
            events: vec![ActivityEvent::ParticipantSignedUp {
                activity: command.activity,
                email: command.email,
            }],
        },
    }
}
