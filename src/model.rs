use serde::{Deserialize, Serialize};

/// Learning units shipped with the app. Each one is a self-contained
/// page instance: same logic, its own catalog and color theme.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UnitId {
    Unit33,
    Unit34,
}

impl UnitId {
    pub fn number(self) -> u32 {
        match self {
            UnitId::Unit33 => 33,
            UnitId::Unit34 => 34,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VocabEntry {
    pub amis: String,   // headword
    pub gloss: String,  // 中文釋義
    pub icon: String,
    pub source: String, // provenance tag of the row in the source corpus
    pub morph: String,  // morphological analysis tag
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SentenceEntry {
    pub amis: String,
    pub gloss: String,
    pub icon: String,
    pub source: String,
}

/// One entry of a unit's quiz pool. `answer` must be one of `options`;
/// `Unit::validate` enforces that at load time.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizItem {
    pub prompt: String,
    #[serde(default)]
    pub audio: String, // text sent to speech synthesis; empty = no audio button
    pub options: Vec<String>,
    pub answer: String,
    pub hint: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Unit {
    pub title: String,
    pub subtitle: String,
    pub speech_lang: String,
    pub completion_note: String,
    pub vocab: Vec<VocabEntry>,
    pub sentences: Vec<SentenceEntry>,
    pub quiz_pool: Vec<QuizItem>,
}

impl Unit {
    /// Consistency checks for an embedded catalog. Run once at load;
    /// a failure aborts startup since the data ships inside the binary.
    pub fn validate(&self) -> Result<(), String> {
        if self.vocab.is_empty() {
            return Err(format!("unit '{}' has no vocabulary", self.title));
        }
        if self.sentences.is_empty() {
            return Err(format!("unit '{}' has no sentences", self.title));
        }
        if self.quiz_pool.len() < crate::session::QUESTIONS_PER_ROUND {
            return Err(format!(
                "unit '{}' quiz pool has {} items, need at least {}",
                self.title,
                self.quiz_pool.len(),
                crate::session::QUESTIONS_PER_ROUND
            ));
        }
        for item in &self.quiz_pool {
            if item.options.len() != 3 {
                return Err(format!(
                    "quiz item '{}' has {} options, expected 3",
                    item.prompt,
                    item.options.len()
                ));
            }
            if !item.options.contains(&item.answer) {
                return Err(format!(
                    "quiz item '{}' is missing its answer among the options",
                    item.prompt
                ));
            }
            for (i, a) in item.options.iter().enumerate() {
                if item.options[i + 1..].contains(a) {
                    return Err(format!(
                        "quiz item '{}' has duplicate option '{a}'",
                        item.prompt
                    ));
                }
            }
        }
        Ok(())
    }
}

/// The two tabs of a unit page.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Study,
    Challenge,
}
