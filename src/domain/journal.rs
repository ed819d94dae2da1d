use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored journal entry as listed in the sidebar. The body itself is fetched
/// separately; listings only carry a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub preview: String,
    pub word_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("entry title must not be empty")]
    EmptyTitle,
    #[error("entry body must not be empty")]
    EmptyBody,
}

/// An entry being written or edited. Saving is gated on `validate`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
}

impl JournalDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(DraftError::EmptyBody);
        }
        Ok(())
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive filter over titles and previews. An empty term matches
/// everything.
pub fn search<'a>(entries: &'a [JournalEntry], term: &str) -> Vec<&'a JournalEntry> {
    let needle = term.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.title.to_lowercase().contains(&needle)
                || entry.preview.to_lowercase().contains(&needle)
        })
        .collect()
}
