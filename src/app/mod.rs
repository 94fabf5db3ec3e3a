use crate::audio::SpeechPlayer;
use crate::data::read_unit_embedded;
use crate::model::{Tab, Unit, UnitId};
use crate::session::QuizSession;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

pub mod actions;
pub mod queries;

/// How long the success cue stays on screen after a correct answer,
/// in seconds. The session itself has already advanced; this is pure
/// presentation.
pub const CELEBRATION_SECS: f64 = 1.0;

/// Storage key for a unit's persisted state. Each unit page keeps its
/// own session so the two instances never step on each other.
pub fn storage_key(id: UnitId) -> String {
    format!("amis_unit_{}", id.number())
}

/// Application state for one unit page. The serialized part survives
/// re-renders and page reloads through `eframe::Storage`; everything
/// derived from the embedded catalog or purely transient is skipped
/// and rebuilt.
#[derive(Serialize, Deserialize)]
pub struct UnitApp {
    pub unit_id: UnitId,
    pub tab: Tab,
    pub session: Option<QuizSession>,
    pub message: String,
    #[serde(skip)]
    pub unit: Unit,
    #[serde(skip)]
    pub theme: Theme,
    #[serde(skip)]
    pub player: SpeechPlayer,
    /// Radio selection, scoped to (session id, question index) so a
    /// restart or an advance never shows a stale selection.
    #[serde(skip)]
    pub pending_choice: Option<(String, usize, usize)>,
    #[serde(skip)]
    pub celebrating_until: Option<f64>,
    #[serde(skip)]
    pub audio_failed: bool,
}

impl UnitApp {
    pub fn new(cc: &eframe::CreationContext<'_>, unit_id: UnitId) -> Self {
        let mut app: UnitApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, &storage_key(unit_id)))
            .unwrap_or_else(|| UnitApp::fresh(unit_id));

        app.unit_id = unit_id;
        app.unit = read_unit_embedded(unit_id);
        app.theme = Theme::for_unit(unit_id);

        // A restored session whose questions no longer exist in the
        // embedded pool (catalog edited between deploys) is discarded.
        if app
            .session
            .as_ref()
            .is_some_and(|s| !s.matches_pool(&app.unit.quiz_pool))
        {
            log::info!(
                "persisted session no longer matches the unit {} pool, resampling",
                unit_id.number()
            );
            app.session = None;
        }
        if app.session.is_none() {
            app.start_session();
        }
        app
    }

    fn fresh(unit_id: UnitId) -> Self {
        Self {
            unit_id,
            tab: Tab::default(),
            session: None,
            message: String::new(),
            unit: Unit::default(),
            theme: Theme::default(),
            player: SpeechPlayer,
            pending_choice: None,
            celebrating_until: None,
            audio_failed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{POINTS_PER_CORRECT, QUESTIONS_PER_ROUND};

    fn test_app(unit_id: UnitId) -> UnitApp {
        let mut app = UnitApp::fresh(unit_id);
        app.unit = read_unit_embedded(unit_id);
        app.theme = Theme::for_unit(unit_id);
        app.start_session();
        app
    }

    fn correct_choice_index(app: &UnitApp) -> usize {
        let session = app.session.as_ref().unwrap();
        let q = session.current_question().unwrap();
        q.shuffled_options
            .iter()
            .position(|o| *o == q.item.answer)
            .unwrap()
    }

    #[test]
    fn correct_submission_advances_and_celebrates() {
        let mut app = test_app(UnitId::Unit33);
        app.select_choice(correct_choice_index(&app));
        app.submit_current(10.0);

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.score(), POINTS_PER_CORRECT);
        assert!(app.is_celebrating(10.5));
        assert!(!app.is_celebrating(10.0 + CELEBRATION_SECS));
    }

    #[test]
    fn wrong_submission_shows_hint_and_keeps_state() {
        let mut app = test_app(UnitId::Unit34);
        let wrong = (correct_choice_index(&app) + 1) % 3;
        app.select_choice(wrong);
        app.submit_current(0.0);

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(app.message.contains("提示"));
        assert!(!app.is_celebrating(0.1));
    }

    #[test]
    fn choice_resets_when_the_question_advances() {
        let mut app = test_app(UnitId::Unit33);
        let idx = correct_choice_index(&app);
        app.select_choice(idx);
        assert_eq!(app.current_choice(), idx);

        app.submit_current(0.0);
        // next question: back to the default first option
        assert_eq!(app.current_choice(), 0);
    }

    #[test]
    fn restart_after_completion_resets_everything() {
        let mut app = test_app(UnitId::Unit33);
        for _ in 0..QUESTIONS_PER_ROUND {
            app.select_choice(correct_choice_index(&app));
            app.submit_current(0.0);
            app.tick_celebration(f64::MAX);
        }
        assert!(app.quiz_complete());
        assert_eq!(app.session.as_ref().unwrap().score(), 100);

        let old_id = app.session.as_ref().unwrap().session_id().to_string();
        app.start_session();
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert_ne!(session.session_id(), old_id);
        assert!(app.message.is_empty());
    }

    #[test]
    fn out_of_range_choice_is_treated_as_incorrect() {
        let mut app = test_app(UnitId::Unit34);
        app.pending_choice = Some((
            app.session.as_ref().unwrap().session_id().to_string(),
            0,
            99,
        ));
        app.submit_current(0.0);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
    }
}
