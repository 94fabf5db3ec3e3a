use crate::model::QuizItem;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const QUESTIONS_PER_ROUND: usize = 5;
pub const POINTS_PER_CORRECT: u32 = 20;

/// A drawn question: the pool item plus the option order fixed for the
/// life of this question. Re-renders must never reshuffle.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActiveQuestion {
    pub item: QuizItem,
    pub shuffled_options: Vec<String>,
}

impl ActiveQuestion {
    fn draw(item: &QuizItem, rng: &mut impl Rng) -> Self {
        let mut shuffled_options = item.options.clone();
        shuffled_options.shuffle(rng);
        Self {
            item: item.clone(),
            shuffled_options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { hint: String },
}

/// One quiz round: 5 questions sampled without replacement, a running
/// score and a progression index. The question set is fixed until an
/// explicit restart; wrong answers can be retried indefinitely.
#[derive(Serialize, Deserialize, Clone)]
pub struct QuizSession {
    questions: Vec<ActiveQuestion>,
    current: usize,
    score: u32,
    session_id: String,
}

impl QuizSession {
    /// Draws a fresh round from `pool`. The pool must hold at least
    /// `QUESTIONS_PER_ROUND` items; the embedded catalogs guarantee it
    /// (`Unit::validate`), so this is a debug assertion, not an error.
    pub fn new(pool: &[QuizItem], rng: &mut impl Rng) -> Self {
        debug_assert!(pool.len() >= QUESTIONS_PER_ROUND);
        let questions = pool
            .choose_multiple(rng, QUESTIONS_PER_ROUND)
            .map(|item| ActiveQuestion::draw(item, rng))
            .collect();
        Self {
            questions,
            current: 0,
            score: 0,
            session_id: fresh_session_id(rng),
        }
    }

    /// The question at the progression index, or `None` once the round
    /// is complete. Completion is a terminal state, not an error.
    pub fn current_question(&self) -> Option<&ActiveQuestion> {
        self.questions.get(self.current)
    }

    /// Grades `choice` against the current question. A correct choice
    /// awards points and advances; anything else (including a string
    /// that is not among the options) leaves the session untouched and
    /// hands back the hint. Returns `None` when the round is already
    /// complete.
    pub fn submit_answer(&mut self, choice: &str) -> Option<AnswerOutcome> {
        let question = self.questions.get(self.current)?;
        if choice == question.item.answer {
            self.score += POINTS_PER_CORRECT;
            self.current += 1;
            Some(AnswerOutcome::Correct)
        } else {
            Some(AnswerOutcome::Incorrect {
                hint: question.item.hint.clone(),
            })
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Fraction answered, for the progress bar.
    pub fn progress(&self) -> f32 {
        self.current as f32 / QUESTIONS_PER_ROUND as f32
    }

    /// Same effect as `new`: resample, reshuffle, reset score and
    /// index, rotate the session id.
    pub fn restart(&mut self, pool: &[QuizItem], rng: &mut impl Rng) {
        *self = Self::new(pool, rng);
    }

    /// Whether a persisted session still matches the embedded pool.
    /// A stale one (catalog edited between deploys) is discarded by the
    /// caller and resampled.
    pub fn matches_pool(&self, pool: &[QuizItem]) -> bool {
        self.questions.len() == QUESTIONS_PER_ROUND
            && self.questions.iter().all(|q| {
                pool.iter()
                    .any(|p| p.prompt == q.item.prompt && p.answer == q.item.answer)
            })
    }
}

fn fresh_session_id(rng: &mut impl Rng) -> String {
    rng.gen_range(1000..10000).to_string()
}
