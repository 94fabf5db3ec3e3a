use thiserror::Error;

/// Pronunciation playback is strictly best-effort: a failure degrades
/// to a muted caption in the UI and must never touch quiz state.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("speech synthesis is not available on this platform")]
    Unavailable,
    #[error("speech synthesis rejected the request: {0}")]
    Synthesis(String),
}

/// Capability wrapper around the browser's speech synthesis. On native
/// builds there is no backend and every call reports `Unavailable`.
#[derive(Default)]
pub struct SpeechPlayer;

impl SpeechPlayer {
    #[cfg(target_arch = "wasm32")]
    pub fn speak(&self, text: &str, lang: &str) -> Result<(), AudioError> {
        let window = web_sys::window().ok_or(AudioError::Unavailable)?;
        let synth = window
            .speech_synthesis()
            .map_err(|_| AudioError::Unavailable)?;
        let utterance = web_sys::SpeechSynthesisUtterance::new_with_text(text)
            .map_err(|e| AudioError::Synthesis(format!("{e:?}")))?;
        utterance.set_lang(lang);
        // Drop whatever is still queued so taps don't pile up.
        synth.cancel();
        synth.speak(&utterance);
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn speak(&self, _text: &str, _lang: &str) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }
}
