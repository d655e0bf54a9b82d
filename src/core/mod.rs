//! Core domain models for the AI Buddy landing page: marketing copy plus
//! the chat transcript and waitlist wizard that power the demo assistant.

pub mod chat;
pub mod content;

pub use chat::{ChatTurn, Transcript, WaitlistRecord, WaitlistWizard, WizardStep};
