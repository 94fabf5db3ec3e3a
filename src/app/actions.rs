use super::*;
use crate::session::AnswerOutcome;

impl UnitApp {
    pub fn switch_tab(&mut self, tab: Tab) {
        if tab != self.tab {
            self.tab = tab;
            self.message.clear();
        }
    }

    /// Best-effort pronunciation playback. Failures flip the muted
    /// caption on and are logged; quiz state is never touched.
    pub fn play_audio(&mut self, text: &str) {
        match self.player.speak(text, &self.unit.speech_lang) {
            Ok(()) => self.audio_failed = false,
            Err(err) => {
                log::warn!("speech playback failed: {err}");
                self.audio_failed = true;
            }
        }
    }

    /// Starts a fresh round: resample 5 questions, reshuffle options,
    /// reset score and index. Also serves as the restart action on the
    /// completion panel.
    pub fn start_session(&mut self) {
        let mut rng = rand::thread_rng();
        match &mut self.session {
            Some(session) => session.restart(&self.unit.quiz_pool, &mut rng),
            None => self.session = Some(QuizSession::new(&self.unit.quiz_pool, &mut rng)),
        }
        self.pending_choice = None;
        self.celebrating_until = None;
        self.message.clear();
        self.audio_failed = false;
    }

    pub fn select_choice(&mut self, option_idx: usize) {
        if let Some(session) = &self.session {
            self.pending_choice = Some((
                session.session_id().to_string(),
                session.current_index(),
                option_idx,
            ));
        }
    }

    /// Grades the pending radio selection against the current question.
    pub fn submit_current(&mut self, now: f64) {
        let choice_idx = self.current_choice();
        let Some(session) = &mut self.session else {
            return;
        };
        let Some(question) = session.current_question() else {
            return;
        };
        // An index outside the options (stale UI state) grades as an
        // ordinary wrong answer rather than a crash.
        let choice = question
            .shuffled_options
            .get(choice_idx)
            .cloned()
            .unwrap_or_default();

        match session.submit_answer(&choice) {
            Some(AnswerOutcome::Correct) => {
                self.message = "🎉 答對了！".to_string();
                self.celebrating_until = Some(now + CELEBRATION_SECS);
                self.pending_choice = None;
            }
            Some(AnswerOutcome::Incorrect { hint }) => {
                self.message = format!("不對喔！提示：{hint}");
            }
            None => {}
        }
    }

    /// Clears an expired success cue. Called once per frame.
    pub fn tick_celebration(&mut self, now: f64) {
        if self.celebrating_until.is_some_and(|t| now >= t) {
            self.celebrating_until = None;
            self.message.clear();
        }
    }
}
