use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scored result returned by the API for a submitted assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub score: u16,
    pub max_score: u16,
}

impl AssessmentOutcome {
    /// Display scaling only; no clinical meaning is attached to this number.
    pub fn percent(&self) -> f32 {
        if self.max_score == 0 {
            0.0
        } else {
            f32::from(self.score) / f32::from(self.max_score) * 100.0
        }
    }
}

/// One point on a mood-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPoint {
    pub date: NaiveDate,
    pub mood: f32,
}

/// A past assessment run as listed on the results screen. The severity label
/// comes from the server as-is; the client never derives it from the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub name: String,
    pub score: u16,
    pub max_score: u16,
    pub severity: String,
    pub recorded_at: NaiveDate,
}

impl AssessmentResult {
    pub fn percent(&self) -> f32 {
        if self.max_score == 0 {
            0.0
        } else {
            f32::from(self.score) / f32::from(self.max_score) * 100.0
        }
    }
}

/// Summary payload backing the dashboard overview cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub todays_mood: Option<u8>,
    pub journals_written: u32,
    pub suggestions_available: u32,
    pub streak_days: u32,
    pub weekly_trend_percent: f32,
    pub mood_week: Vec<MoodPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_percent_scales_for_display() {
        let outcome = AssessmentOutcome {
            score: 7,
            max_score: 21,
        };
        assert!((outcome.percent() - 33.333_332).abs() < 0.001);

        let empty = AssessmentOutcome {
            score: 0,
            max_score: 0,
        };
        assert_eq!(empty.percent(), 0.0);
    }

    #[test]
    fn result_rows_round_trip_json() {
        let row = AssessmentResult {
            name: "GAD-7 (Anxiety)".to_string(),
            score: 5,
            max_score: 21,
            severity: "Mild".to_string(),
            recorded_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: AssessmentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
        assert!((back.percent() - 23.809_524).abs() < 0.001);
    }
}
