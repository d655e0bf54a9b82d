//! Voice capture bridge for the chat input
//!
//! Wraps the browser's speech-recognition capability behind a small context:
//! a listening flag and the live transcript of the capture in progress. The
//! live transcript only ever feeds the pending input field (see `app.rs`);
//! the chat wizard never talks to this module.

use leptos::prelude::*;
use thiserror::Error;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use std::cell::RefCell;

#[cfg(not(feature = "ssr"))]
thread_local! {
    // Active recognition session, kept so the toggle can abort it.
    static ACTIVE_RECOGNITION: RefCell<Option<web_sys::SpeechRecognition>> =
        const { RefCell::new(None) };
}

/// Reasons the browser could not provide speech capture.
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("speech recognition is not available in this browser")]
    Unsupported,
    #[error("speech recognition failed to start: {0}")]
    Start(String),
}

/// Voice capture state shared with the chat input controls
#[derive(Clone, Copy)]
pub struct VoiceContext {
    /// Whether capture is currently running
    pub listening: RwSignal<bool>,
    /// Live transcript of the in-progress capture
    pub live_transcript: RwSignal<String>,
}

impl VoiceContext {
    /// Start capture if idle, abort it if running. Start failures are
    /// logged and leave the page fully usable by keyboard.
    pub fn toggle(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if self.listening.get_untracked() {
                self.stop();
            } else if let Err(err) = self.start() {
                leptos::logging::warn!("voice capture unavailable: {err}");
            }
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn start(&self) -> Result<(), VoiceError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let recognition =
            web_sys::SpeechRecognition::new().map_err(|_| VoiceError::Unsupported)?;
        recognition.set_continuous(false);
        recognition.set_interim_results(true);

        let live = self.live_transcript;
        let on_result = Closure::<dyn FnMut(web_sys::SpeechRecognitionEvent)>::new(
            move |event: web_sys::SpeechRecognitionEvent| {
                let results = event.results();
                let mut heard = String::new();
                for index in 0..results.length() {
                    if let Some(result) = results.get(index) {
                        if let Some(alternative) = result.get(0) {
                            heard.push_str(&alternative.transcript());
                        }
                    }
                }
                live.set(heard);
            },
        );
        recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
        // Keep the closure alive
        on_result.forget();

        let listening = self.listening;
        let on_end = Closure::<dyn FnMut()>::new(move || {
            listening.set(false);
        });
        recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));
        on_end.forget();

        recognition
            .start()
            .map_err(|err| VoiceError::Start(format!("{err:?}")))?;

        ACTIVE_RECOGNITION.with(|slot| *slot.borrow_mut() = Some(recognition));
        self.listening.set(true);
        Ok(())
    }

    /// Abort the running session. Discards only the partial capture; the
    /// conversation transcript keeps every turn it already has.
    #[cfg(not(feature = "ssr"))]
    fn stop(&self) {
        ACTIVE_RECOGNITION.with(|slot| {
            if let Some(recognition) = slot.borrow_mut().take() {
                recognition.abort();
            }
        });
        self.listening.set(false);
        self.live_transcript.set(String::new());
    }
}

/// Provide voice capture context to the application
pub fn provide_voice_context() -> VoiceContext {
    let ctx = VoiceContext {
        listening: RwSignal::new(false),
        live_transcript: RwSignal::new(String::new()),
    };

    provide_context(ctx);

    ctx
}

/// Use voice context from anywhere in the component tree
pub fn use_voice_context() -> VoiceContext {
    use_context::<VoiceContext>().expect("VoiceContext should be provided")
}
