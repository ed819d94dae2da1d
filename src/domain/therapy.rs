use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TherapyCategory {
    Anxiety,
    Stress,
    Focus,
    Sleep,
    Depression,
    SelfEsteem,
}

impl TherapyCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TherapyCategory::Anxiety => "Anxiety Relief",
            TherapyCategory::Stress => "Stress Management",
            TherapyCategory::Focus => "Focus & Clarity",
            TherapyCategory::Sleep => "Sleep & Rest",
            TherapyCategory::Depression => "Mood Support",
            TherapyCategory::SelfEsteem => "Self-Esteem",
        }
    }
}

impl TryFrom<&str> for TherapyCategory {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "anxiety" => Ok(TherapyCategory::Anxiety),
            "stress" => Ok(TherapyCategory::Stress),
            "focus" => Ok(TherapyCategory::Focus),
            "sleep" => Ok(TherapyCategory::Sleep),
            "depression" => Ok(TherapyCategory::Depression),
            "self-esteem" | "self_esteem" => Ok(TherapyCategory::SelfEsteem),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A guided exercise from the static content library.
#[derive(Debug, Clone, Serialize)]
pub struct TherapySuggestion {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: TherapyCategory,
    pub duration_min: u16,
    pub difficulty: Difficulty,
    pub rating: f32,
    pub tags: &'static [&'static str],
}

pub static LIBRARY: Lazy<Vec<TherapySuggestion>> = Lazy::new(|| {
    vec![
        TherapySuggestion {
            id: 1,
            title: "5-Minute Breathing Exercise",
            description: "A quick breathing technique to reduce anxiety and center yourself in moments of stress.",
            category: TherapyCategory::Anxiety,
            duration_min: 5,
            difficulty: Difficulty::Beginner,
            rating: 4.8,
            tags: &["Quick", "Anxiety Relief"],
        },
        TherapySuggestion {
            id: 2,
            title: "Guided Meditation for Sleep",
            description: "Gentle meditation to help quiet your mind and prepare for restful sleep.",
            category: TherapyCategory::Sleep,
            duration_min: 15,
            difficulty: Difficulty::Beginner,
            rating: 4.9,
            tags: &["Sleep", "Relaxation"],
        },
        TherapySuggestion {
            id: 3,
            title: "Morning Mindfulness Routine",
            description: "Start your day with intention and clarity through this energizing mindfulness practice.",
            category: TherapyCategory::Focus,
            duration_min: 10,
            difficulty: Difficulty::Intermediate,
            rating: 4.7,
            tags: &["Morning", "Energy"],
        },
        TherapySuggestion {
            id: 4,
            title: "Stress Relief Visualization",
            description: "Use the power of imagination to transport yourself to a peaceful, calming environment.",
            category: TherapyCategory::Stress,
            duration_min: 12,
            difficulty: Difficulty::Beginner,
            rating: 4.6,
            tags: &["Stress Relief", "Visualization"],
        },
        TherapySuggestion {
            id: 5,
            title: "Progressive Muscle Relaxation",
            description: "Systematically tense and relax muscle groups to release physical tension and stress.",
            category: TherapyCategory::Stress,
            duration_min: 20,
            difficulty: Difficulty::Intermediate,
            rating: 4.8,
            tags: &["Physical", "Deep Relaxation"],
        },
        TherapySuggestion {
            id: 6,
            title: "Cognitive Restructuring Exercise",
            description: "Learn to identify and challenge negative thought patterns with practical techniques.",
            category: TherapyCategory::Depression,
            duration_min: 25,
            difficulty: Difficulty::Advanced,
            rating: 4.9,
            tags: &["CBT", "Thought Work"],
        },
        TherapySuggestion {
            id: 7,
            title: "Binaural Beats for Focus",
            description: "Use scientifically-designed audio frequencies to enhance concentration and mental clarity.",
            category: TherapyCategory::Focus,
            duration_min: 30,
            difficulty: Difficulty::Beginner,
            rating: 4.5,
            tags: &["Audio", "Concentration"],
        },
        TherapySuggestion {
            id: 8,
            title: "Self-Compassion Practice",
            description: "Develop a kinder, more supportive relationship with yourself through guided exercises.",
            category: TherapyCategory::SelfEsteem,
            duration_min: 18,
            difficulty: Difficulty::Intermediate,
            rating: 4.8,
            tags: &["Self-Love", "Healing"],
        },
    ]
});

/// Library view for the browse screen; `None` means every category.
pub fn suggestions_for(category: Option<TherapyCategory>) -> Vec<&'static TherapySuggestion> {
    LIBRARY
        .iter()
        .filter(|s| category.map_or(true, |c| s.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_category_returns_whole_library() {
        assert_eq!(suggestions_for(None).len(), LIBRARY.len());
    }

    #[test]
    fn filter_returns_only_matching_category() {
        let stress = suggestions_for(Some(TherapyCategory::Stress));
        assert_eq!(stress.len(), 2);
        assert!(stress.iter().all(|s| s.category == TherapyCategory::Stress));

        let sleep = suggestions_for(Some(TherapyCategory::Sleep));
        assert_eq!(sleep.len(), 1);
        assert_eq!(sleep[0].title, "Guided Meditation for Sleep");
    }

    #[test]
    fn categories_parse_from_query_values() {
        assert_eq!(
            TherapyCategory::try_from("self-esteem"),
            Ok(TherapyCategory::SelfEsteem)
        );
        assert_eq!(
            TherapyCategory::try_from(" Anxiety "),
            Ok(TherapyCategory::Anxiety)
        );
        assert!(TherapyCategory::try_from("all").is_err());
    }

    #[test]
    fn category_labels_match_the_browse_filter() {
        assert_eq!(TherapyCategory::Depression.label(), "Mood Support");
        assert_eq!(TherapyCategory::Focus.label(), "Focus & Clarity");
    }
}
