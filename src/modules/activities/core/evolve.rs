use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;

pub fn evolve(mut activity: Activity, event: ActivityEvent) -> Activity {
    match event {
        ActivityEvent::ParticipantSignedUp { email, .. } => {
            if !activity.is_signed_up(&email) {
                activity.participants.push(email);
            }
        }
        ActivityEvent::ParticipantUnregistered { email, .. } => {
            activity.participants.retain(|p| *p != email);
        }
    }
    activity
}
