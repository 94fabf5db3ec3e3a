use super::*;

impl UnitApp {
    /// The radio selection for the current question. Defaults to the
    /// first option; a selection made for a different question or
    /// session never leaks through.
    pub fn current_choice(&self) -> usize {
        let Some(session) = &self.session else {
            return 0;
        };
        match &self.pending_choice {
            Some((sid, qidx, opt))
                if sid == session.session_id() && *qidx == session.current_index() =>
            {
                *opt
            }
            _ => 0,
        }
    }

    pub fn is_celebrating(&self, now: f64) -> bool {
        self.celebrating_until.is_some_and(|t| now < t)
    }

    pub fn quiz_complete(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_complete())
    }
}
