//! Conversation transcript and the waitlist signup wizard.
//!
//! The transcript is an append-only list of chat turns. The wizard walks a
//! visitor through the four waitlist questions (name, email, phone, use
//! case) and then falls through to keyword-matched canned responses. All of
//! it is plain in-memory state; nothing is sent or stored anywhere.

use serde::{Deserialize, Serialize};

use crate::core::content::{CONFIRMATION_PREVIEW, DEMO_COMMANDS, GREETING, LAUNCH_WINDOW};

/// A single turn in the conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub text: String,
    pub is_bot: bool,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_bot: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_bot: true,
        }
    }
}

/// Ordered, append-only conversation history. Insertion order is display
/// order; turns are never mutated, reordered, or removed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript seeded with the assistant's greeting.
    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        transcript.append(ChatTurn::bot(GREETING));
        transcript
    }

    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn into_turns(self) -> Vec<ChatTurn> {
        self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Lead details collected by the wizard, filled one field at a time in
/// fixed order. Never transmitted anywhere; only echoed back on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistRecord {
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub use_case: String,
}

impl WaitlistRecord {
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !self.use_case.is_empty()
    }
}

/// Where the signup conversation currently stands.
///
/// The four question states advance strictly in order; `FreeChat` is the
/// resting state once the record is complete, left only when the visitor
/// asks to join the waitlist again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    AskName,
    AskEmail,
    AskPhone,
    AskUseCase,
    FreeChat,
}

const ASK_EMAIL_PROMPT: &str = "Great! What's your email address?";
const INVALID_EMAIL_PROMPT: &str = "Please enter a valid email address.";
const ASK_PHONE_PROMPT: &str = "Perfect! What's your phone number?";
const ASK_USE_CASE_PROMPT: &str = "Almost done! What's your primary use case for AI Buddy? (e.g., development, automation, content creation)";
const RESTART_PROMPT: &str = "Great choice! Let's get you on the waitlist. What's your first name?";
const FALLBACK_REPLY: &str = "I can help you explore our features, show you a demo, or help you join the waitlist. What would you like to know?";

/// Keyword rules for the free-conversation state, evaluated in order
/// against the lowercased input; the first rule with any matching keyword
/// wins.
const FREE_CHAT_RULES: &[(&[&str], fn(&mut WaitlistWizard) -> String)] = &[
    (
        &["feature", "what", "can"],
        WaitlistWizard::features_reply,
    ),
    (&["example", "demo"], WaitlistWizard::demo_reply),
    (&["waitlist", "join"], WaitlistWizard::restart_signup),
];

/// The signup wizard and canned-response engine.
///
/// One visitor submission in, zero-or-more state changes plus at least one
/// bot reply out. Callers must not pass blank input: the submit handler
/// discards whitespace-only text before it reaches [`WaitlistWizard::handle`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WaitlistWizard {
    step: WizardStep,
    record: WaitlistRecord,
}

impl WaitlistWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn record(&self) -> &WaitlistRecord {
        &self.record
    }

    /// Process one visitor submission and return the bot replies to append
    /// to the transcript.
    pub fn handle(&mut self, input: &str) -> Vec<String> {
        match self.step {
            WizardStep::AskName => {
                self.record.first_name = input.to_string();
                self.step = WizardStep::AskEmail;
                vec![ASK_EMAIL_PROMPT.to_string()]
            }
            WizardStep::AskEmail => {
                // The only validated field: re-ask in place, record nothing.
                if !input.contains('@') {
                    return vec![INVALID_EMAIL_PROMPT.to_string()];
                }
                self.record.email = input.to_string();
                self.step = WizardStep::AskPhone;
                vec![ASK_PHONE_PROMPT.to_string()]
            }
            WizardStep::AskPhone => {
                self.record.phone = input.to_string();
                self.step = WizardStep::AskUseCase;
                vec![ASK_USE_CASE_PROMPT.to_string()]
            }
            WizardStep::AskUseCase => {
                self.record.use_case = input.to_string();
                self.step = WizardStep::FreeChat;
                vec![confirmation_reply()]
            }
            WizardStep::FreeChat => {
                let lowered = input.to_lowercase();
                let action = FREE_CHAT_RULES
                    .iter()
                    .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
                    .map(|(_, action)| *action)
                    .unwrap_or(|_: &mut Self| FALLBACK_REPLY.to_string());
                vec![action(self)]
            }
        }
    }

    fn features_reply(&mut self) -> String {
        format!(
            "Here's what AI Buddy can do for you:\n\n{}\n\nWould you like to try any of these features or join our waitlist?",
            DEMO_COMMANDS.join("\n")
        )
    }

    fn demo_reply(&mut self) -> String {
        "Let me show you a quick demo! Try saying:\n\n\
         🗣 'Create a React component'\n\
         🗣 'Deploy my application'\n\
         🗣 'Optimize my code'\n\
         🗣 'Debug this error'\n\n\
         Just click the microphone icon or type your command!"
            .to_string()
    }

    /// Re-enter the wizard from free chat. Previously captured fields stay
    /// in place and get overwritten question by question.
    fn restart_signup(&mut self) -> String {
        self.step = WizardStep::AskName;
        RESTART_PROMPT.to_string()
    }
}

fn confirmation_reply() -> String {
    format!(
        "Thank you for joining our waitlist! 🚀\n\nWe're excited to have you on board. Here's what you can look forward to:\n\n{}\n\n...and much more! Stay tuned for our launch in {}! 🎉",
        DEMO_COMMANDS[..CONFIRMATION_PREVIEW].join("\n"),
        LAUNCH_WINDOW
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_wizard() -> WaitlistWizard {
        let mut wizard = WaitlistWizard::new();
        wizard.handle("Alex");
        wizard.handle("a@b.com");
        wizard.handle("555-1234");
        wizard.handle("automation");
        wizard
    }

    #[test]
    fn test_transcript_append_preserves_order() {
        let mut transcript = Transcript::with_greeting();
        assert_eq!(transcript.len(), 1);
        assert!(transcript.turns()[0].is_bot);

        transcript.append(ChatTurn::user("hello"));
        transcript.append(ChatTurn::bot("hi"));

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.turns()[0].text, GREETING);
        assert_eq!(transcript.turns()[1].text, "hello");
        assert!(!transcript.turns()[1].is_bot);
        assert_eq!(transcript.turns()[2].text, "hi");
    }

    #[test]
    fn test_name_step_records_verbatim_and_advances() {
        let mut wizard = WaitlistWizard::new();
        assert_eq!(wizard.step(), WizardStep::AskName);

        let replies = wizard.handle("Alex");

        assert_eq!(wizard.record().first_name, "Alex");
        assert_eq!(wizard.step(), WizardStep::AskEmail);
        assert_eq!(replies, vec![ASK_EMAIL_PROMPT.to_string()]);
    }

    #[test]
    fn test_email_without_at_reasks_in_place() {
        let mut wizard = WaitlistWizard::new();
        wizard.handle("Alex");

        let replies = wizard.handle("not-an-email");

        assert_eq!(wizard.step(), WizardStep::AskEmail);
        assert_eq!(wizard.record().email, "");
        assert_eq!(replies, vec![INVALID_EMAIL_PROMPT.to_string()]);

        // Still recoverable on the next attempt.
        wizard.handle("alex@example.com");
        assert_eq!(wizard.step(), WizardStep::AskPhone);
        assert_eq!(wizard.record().email, "alex@example.com");
    }

    #[test]
    fn test_email_is_recorded_verbatim() {
        let mut wizard = WaitlistWizard::new();
        wizard.handle("Alex");
        wizard.handle("  spaced@odd.example  ");

        // No trimming or normalization beyond what the submit handler does.
        assert_eq!(wizard.record().email, "  spaced@odd.example  ");
    }

    #[test]
    fn test_full_signup_flow() {
        let wizard = completed_wizard();

        assert_eq!(
            wizard.record(),
            &WaitlistRecord {
                first_name: "Alex".to_string(),
                email: "a@b.com".to_string(),
                phone: "555-1234".to_string(),
                use_case: "automation".to_string(),
            }
        );
        assert!(wizard.record().is_complete());
        assert_eq!(wizard.step(), WizardStep::FreeChat);
    }

    #[test]
    fn test_confirmation_previews_first_five_commands() {
        let mut wizard = WaitlistWizard::new();
        wizard.handle("Alex");
        wizard.handle("a@b.com");
        wizard.handle("555-1234");
        let replies = wizard.handle("automation");

        assert_eq!(replies.len(), 1);
        let confirmation = &replies[0];
        assert!(confirmation.contains("Thank you for joining our waitlist!"));
        assert!(confirmation.contains(LAUNCH_WINDOW));
        for command in &DEMO_COMMANDS[..CONFIRMATION_PREVIEW] {
            assert!(confirmation.contains(command));
        }
        assert!(!confirmation.contains(DEMO_COMMANDS[CONFIRMATION_PREVIEW]));
    }

    #[test]
    fn test_feature_keywords_list_every_command() {
        let mut wizard = completed_wizard();

        let replies = wizard.handle("what can you do");
        assert_eq!(replies.len(), 1);
        for command in DEMO_COMMANDS {
            assert!(replies[0].contains(command));
        }
        assert_eq!(wizard.step(), WizardStep::FreeChat);

        // Same question, same answer.
        let again = wizard.handle("what can you do");
        assert_eq!(replies, again);
    }

    #[test]
    fn test_keyword_rules_match_first_in_order() {
        let mut wizard = completed_wizard();

        // "what" outranks "demo" when both appear.
        let replies = wizard.handle("what about a demo");
        assert!(replies[0].contains("Here's what AI Buddy can do for you"));
    }

    #[test]
    fn test_demo_keyword_reply() {
        let mut wizard = completed_wizard();

        let replies = wizard.handle("show me an example");
        assert!(replies[0].contains("Let me show you a quick demo!"));
        assert_eq!(wizard.step(), WizardStep::FreeChat);
    }

    #[test]
    fn test_join_keyword_restarts_without_clearing_record() {
        let mut wizard = completed_wizard();

        let replies = wizard.handle("I want to join the waitlist");

        assert_eq!(wizard.step(), WizardStep::AskName);
        assert_eq!(replies, vec![RESTART_PROMPT.to_string()]);
        // Old answers survive until overwritten one by one.
        assert_eq!(wizard.record().first_name, "Alex");
        assert_eq!(wizard.record().email, "a@b.com");

        wizard.handle("Sam");
        assert_eq!(wizard.record().first_name, "Sam");
        assert_eq!(wizard.record().email, "a@b.com");
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        let mut wizard = completed_wizard();

        let replies = wizard.handle("hmm");
        assert_eq!(replies, vec![FALLBACK_REPLY.to_string()]);
        assert_eq!(wizard.step(), WizardStep::FreeChat);
    }

    #[test]
    fn test_every_submission_yields_a_reply() {
        let mut wizard = WaitlistWizard::new();
        for input in ["Alex", "nope", "a@b.com", "555", "dev", "hi", "join"] {
            let replies = wizard.handle(input);
            assert!(!replies.is_empty());
        }
    }
}
