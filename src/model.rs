use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vocabulary entry. Ids are generated server-side and never reassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub english: String,
    pub bangla: String,
}

/// A bookmark referencing a [`Word`] by id. The reference is weak: nothing
/// checks that the word actually exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWord {
    pub word_id: String,
    pub saved_at: DateTime<Utc>,
}

/// An example sentence for a word. No id, no uniqueness constraint.
/// Absent payload fields decode to empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    #[serde(default)]
    pub word_id: String,
    #[serde(default)]
    pub content: String,
}

/// Shape of one entry in the read-only seeds file.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub english: String,
    pub bangla: String,
}
