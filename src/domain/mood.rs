use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display labels for the 1-10 mood scale, lowest to highest.
const MOOD_LABELS: [&str; 10] = [
    "Very Sad", "Sad", "Down", "Okay", "Good", "Happy", "Very Happy", "Joyful", "Amazing",
    "Euphoric",
];

/// A mood rating on the 1..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub fn new(value: u8) -> Option<Self> {
        (1..=10).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        MOOD_LABELS[usize::from(self.0) - 1]
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("mood must be between 1 and 10, got {value}"))
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.0
    }
}

/// Payload for `POST /moodlog`. The server stores the label, not the number.
#[derive(Debug, Clone, Serialize)]
pub struct MoodLogDraft {
    pub user_id: i64,
    pub mood: String,
    pub note: String,
}

impl MoodLogDraft {
    pub fn new(user_id: i64, level: MoodLevel, note: impl Into<String>) -> Self {
        Self {
            user_id,
            mood: level.label().to_string(),
            note: note.into(),
        }
    }
}

/// A stored mood log as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLog {
    pub id: i64,
    pub user_id: i64,
    pub mood: String,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_bounds_are_enforced() {
        assert!(MoodLevel::new(0).is_none());
        assert!(MoodLevel::new(11).is_none());
        assert_eq!(MoodLevel::new(1).unwrap().label(), "Very Sad");
        assert_eq!(MoodLevel::new(10).unwrap().label(), "Euphoric");
    }

    #[test]
    fn draft_carries_the_label() {
        let draft = MoodLogDraft::new(42, MoodLevel::new(4).unwrap(), "long day");
        assert_eq!(draft.mood, "Okay");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["user_id"], 42);
        assert_eq!(json["mood"], "Okay");
        assert_eq!(json["note"], "long day");
    }

    #[test]
    fn level_deserializes_from_bare_number() {
        let level: MoodLevel = serde_json::from_str("7").unwrap();
        assert_eq!(level.label(), "Very Happy");
        assert!(serde_json::from_str::<MoodLevel>("12").is_err());
    }
}
