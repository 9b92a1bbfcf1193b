//! Flat-file JSON persistence for the three vocabulary collections.
//!
//! Each collection lives in one pretty-printed JSON array on disk. Every
//! operation is a full read-modify-write of its file, serialized by that
//! file's own async mutex; operations on different collections do not block
//! each other. Writes go through a temp file in the same directory followed
//! by a rename, so a crash mid-write never leaves a half-written store.

use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::StoreError;
use crate::model::{SavedWord, Seed, Sentence, Word};

const WORDS_FILE: &str = "words.json";
const SAVED_WORDS_FILE: &str = "saved_words.json";
const SENTENCES_FILE: &str = "sentences.json";
const SEEDS_FILE: &str = "seeds.json";

/// One JSON array on disk plus the mutex that serializes access to it.
struct JsonFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFile {
    fn new(path: PathBuf) -> Self {
        JsonFile {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Loads the full collection. A missing or empty file is an empty
    /// collection, not an error.
    async fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Replaces the file with the pretty-printed collection. The temp file
    /// sits next to the target so the rename stays on one filesystem.
    async fn save<T: Serialize>(&self, items: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

/// Outcome of an idempotent bookmark add.
#[derive(Debug)]
pub enum SaveOutcome {
    Created(SavedWord),
    Exists(SavedWord),
}

/// The three collection stores plus the read-only seeds input, all rooted
/// in one data directory.
pub struct Storage {
    words: JsonFile,
    saved_words: JsonFile,
    sentences: JsonFile,
    seeds: JsonFile,
}

impl Storage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let dir = data_dir.into();
        Storage {
            words: JsonFile::new(dir.join(WORDS_FILE)),
            saved_words: JsonFile::new(dir.join(SAVED_WORDS_FILE)),
            sentences: JsonFile::new(dir.join(SENTENCES_FILE)),
            seeds: JsonFile::new(dir.join(SEEDS_FILE)),
        }
    }

    /// Lists all words. When the store is empty this also attempts to seed
    /// it from `seeds.json`: entries get sequential ids `w1, w2, …` and are
    /// persisted before the response. A missing or unreadable seeds file is
    /// ignored; the seeding retries on every empty-state list until one
    /// persist succeeds.
    pub async fn list_words(&self) -> Result<Vec<Word>, StoreError> {
        let _guard = self.words.lock().await;
        let mut words: Vec<Word> = self.words.load().await?;

        if words.is_empty() {
            if let Ok(seeds) = self.seeds.load::<Seed>().await {
                if !seeds.is_empty() {
                    words = seeds
                        .into_iter()
                        .enumerate()
                        .map(|(i, seed)| Word {
                            id: format!("w{}", i + 1),
                            english: seed.english,
                            bangla: seed.bangla,
                        })
                        .collect();
                    self.words.save(&words).await?;
                }
            }
        }

        Ok(words)
    }

    /// Appends a word under a fresh clock-derived id and returns the stored
    /// record.
    pub async fn add_word(&self, english: String, bangla: String) -> Result<Word, StoreError> {
        let _guard = self.words.lock().await;
        let mut words: Vec<Word> = self.words.load().await?;

        let word = Word {
            id: clock_word_id(),
            english,
            bangla,
        };
        words.push(word.clone());
        self.words.save(&words).await?;

        Ok(word)
    }

    pub async fn list_saved_words(&self) -> Result<Vec<SavedWord>, StoreError> {
        let _guard = self.saved_words.lock().await;
        self.saved_words.load().await
    }

    /// Bookmarks a word id. Adding an already-bookmarked id is a no-op that
    /// returns the existing record.
    pub async fn save_word(&self, word_id: &str) -> Result<SaveOutcome, StoreError> {
        let _guard = self.saved_words.lock().await;
        let mut saved: Vec<SavedWord> = self.saved_words.load().await?;

        if let Some(existing) = saved.iter().find(|s| s.word_id == word_id) {
            return Ok(SaveOutcome::Exists(existing.clone()));
        }

        let record = SavedWord {
            word_id: word_id.to_owned(),
            saved_at: Utc::now(),
        };
        saved.push(record.clone());
        self.saved_words.save(&saved).await?;

        Ok(SaveOutcome::Created(record))
    }

    /// Drops every bookmark matching the word id. The filtered list is
    /// persisted even when nothing matched.
    pub async fn remove_saved_word(&self, word_id: &str) -> Result<(), StoreError> {
        let _guard = self.saved_words.lock().await;
        let mut saved: Vec<SavedWord> = self.saved_words.load().await?;

        saved.retain(|s| s.word_id != word_id);
        self.saved_words.save(&saved).await
    }

    /// Lists sentences, restricted to one word id when given.
    pub async fn list_sentences(&self, word_id: Option<&str>) -> Result<Vec<Sentence>, StoreError> {
        let _guard = self.sentences.lock().await;
        let sentences: Vec<Sentence> = self.sentences.load().await?;

        Ok(match word_id {
            Some(id) => sentences.into_iter().filter(|s| s.word_id == id).collect(),
            None => sentences,
        })
    }

    /// Appends a sentence as submitted. Sentences carry no generated id.
    pub async fn add_sentence(&self, sentence: Sentence) -> Result<Sentence, StoreError> {
        let _guard = self.sentences.lock().await;
        let mut sentences: Vec<Sentence> = self.sentences.load().await?;

        sentences.push(sentence.clone());
        self.sentences.save(&sentences).await?;

        Ok(sentence)
    }
}

/// `w<unix-nanos>`. Uniqueness is assumed, not enforced.
fn clock_word_id() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("w{nanos}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> Storage {
        Storage::new(dir.path())
    }

    #[tokio::test]
    async fn missing_files_load_empty() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);

        assert!(store.list_words().await.unwrap().is_empty());
        assert!(store.list_saved_words().await.unwrap().is_empty());
        assert!(store.list_sentences(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SENTENCES_FILE), "").unwrap();

        let store = storage(&dir);
        assert!(store.list_sentences(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeds_words_once_with_sequential_ids() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SEEDS_FILE),
            r#"[{"english":"cat","bangla":"বিড়াল"},{"english":"dog","bangla":"কুকুর"}]"#,
        )
        .unwrap();

        let store = storage(&dir);
        let words = store.list_words().await.unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].id, "w1");
        assert_eq!(words[0].english, "cat");
        assert_eq!(words[1].id, "w2");
        assert_eq!(words[1].bangla, "কুকুর");

        // Seeding persisted, so a second list returns the same records
        // without duplicating them.
        assert!(dir.path().join(WORDS_FILE).exists());
        let again = store.list_words().await.unwrap();
        assert_eq!(again.len(), 2);
        assert_eq!(again[0].id, "w1");
    }

    #[tokio::test]
    async fn malformed_seeds_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SEEDS_FILE), "not json").unwrap();

        let store = storage(&dir);
        assert!(store.list_words().await.unwrap().is_empty());
        assert!(!dir.path().join(WORDS_FILE).exists());
    }

    #[tokio::test]
    async fn add_word_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);

        let word = store
            .add_word("apple".to_string(), "আপেল".to_string())
            .await
            .unwrap();
        assert!(word.id.starts_with('w'));

        let words = store.list_words().await.unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].id, word.id);
        assert_eq!(words[0].english, "apple");
        assert_eq!(words[0].bangla, "আপেল");
    }

    #[tokio::test]
    async fn duplicate_save_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);

        let first = store.save_word("w1").await.unwrap();
        assert!(matches!(first, SaveOutcome::Created(_)));

        let second = store.save_word("w1").await.unwrap();
        match second {
            SaveOutcome::Exists(record) => assert_eq!(record.word_id, "w1"),
            other => panic!("expected Exists, got {other:?}"),
        }

        assert_eq!(store.list_saved_words().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_saved_word_filters_all_matching() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);

        store.save_word("w1").await.unwrap();
        store.save_word("w2").await.unwrap();

        store.remove_saved_word("w1").await.unwrap();
        let saved = store.list_saved_words().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].word_id, "w2");

        // Removing an id with no matches still succeeds and persists.
        store.remove_saved_word("w9").await.unwrap();
        assert_eq!(store.list_saved_words().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn sentences_filter_by_word_id() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);

        store
            .add_sentence(Sentence {
                word_id: "w1".to_string(),
                content: "a".to_string(),
            })
            .await
            .unwrap();
        store
            .add_sentence(Sentence {
                word_id: "w2".to_string(),
                content: "b".to_string(),
            })
            .await
            .unwrap();

        let filtered = store.list_sentences(Some("w1")).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content, "a");

        assert_eq!(store.list_sentences(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn malformed_store_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(WORDS_FILE), "{ not json").unwrap();

        let store = storage(&dir);
        let err = store.list_words().await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);

        store
            .add_word("book".to_string(), "বই".to_string())
            .await
            .unwrap();

        assert!(dir.path().join(WORDS_FILE).exists());
        assert!(!dir.path().join("words.json.tmp").exists());
    }
}
