use once_cell::sync::Lazy;
use serde::Serialize;

/// Highest score a single answer can carry on the shared scale.
pub const MAX_OPTION_VALUE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
}

/// The 4-option frequency scale shared by every instrument in the catalog.
pub const ANSWER_SCALE: [AnswerOption; 4] = [
    AnswerOption {
        value: 0,
        label: "Not at all",
    },
    AnswerOption {
        value: 1,
        label: "Several days",
    },
    AnswerOption {
        value: 2,
        label: "More than half the days",
    },
    AnswerOption {
        value: 3,
        label: "Nearly every day",
    },
];

/// A named, ordered questionnaire with a fixed scoring scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instrument {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_hint: &'static str,
    pub questions: &'static [&'static str],
}

impl Instrument {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn max_score(&self) -> u16 {
        self.questions.len() as u16 * u16::from(MAX_OPTION_VALUE)
    }
}

const GAD7_QUESTIONS: &[&str] = &[
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it's hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid as if something awful might happen",
];

const PHQ9_QUESTIONS: &[&str] = &[
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself or that you are a failure",
    "Trouble concentrating on things",
    "Moving or speaking slowly, or being fidgety or restless",
    "Thoughts that you would be better off dead or of hurting yourself",
];

pub static INSTRUMENTS: Lazy<Vec<Instrument>> = Lazy::new(|| {
    vec![
        Instrument {
            id: "gad7",
            title: "GAD-7 (Anxiety Assessment)",
            description: "Generalized Anxiety Disorder 7-item scale to measure anxiety levels",
            duration_hint: "2-3 minutes",
            questions: GAD7_QUESTIONS,
        },
        Instrument {
            id: "phq9",
            title: "PHQ-9 (Depression Screening)",
            description: "Patient Health Questionnaire to assess depression symptoms",
            duration_hint: "3-4 minutes",
            questions: PHQ9_QUESTIONS,
        },
    ]
});

pub fn find(id: &str) -> Option<&'static Instrument> {
    INSTRUMENTS.iter().find(|i| i.id == id)
}

pub fn is_valid_score(value: u8) -> bool {
    ANSWER_SCALE.iter().any(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_both_instruments() {
        let gad7 = find("gad7").expect("gad7 present");
        assert_eq!(gad7.question_count(), 7);
        assert_eq!(gad7.max_score(), 21);

        let phq9 = find("phq9").expect("phq9 present");
        assert_eq!(phq9.question_count(), 9);
        assert_eq!(phq9.max_score(), 27);

        assert!(find("who5").is_none());
    }

    #[test]
    fn scale_runs_zero_to_three() {
        let values: Vec<u8> = ANSWER_SCALE.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
        assert_eq!(ANSWER_SCALE[0].label, "Not at all");
        assert_eq!(ANSWER_SCALE[3].label, "Nearly every day");
    }

    #[test]
    fn score_validation_tracks_scale() {
        assert!(is_valid_score(0));
        assert!(is_valid_score(3));
        assert!(!is_valid_score(4));
    }
}
