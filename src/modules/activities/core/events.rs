#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    ParticipantSignedUp { activity: String, email: String },
    ParticipantUnregistered { activity: String, email: String },
}
