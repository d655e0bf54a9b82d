//! Chat assistant UI
//!
//! One shared conversation drives both the embedded demo panel and the
//! floating widget: same transcript, same wizard, same pending draft. A
//! submission appends the visitor turn, hands the text to the wizard, and
//! appends whatever the wizard replies.

use leptos::prelude::*;

use crate::core::{ChatTurn, Transcript, WaitlistWizard};
use crate::ui::icon::{Icon, icons};
use crate::ui::voice::use_voice_context;

/// Shared chat state for every chat surface on the page
#[derive(Clone, Copy)]
pub struct ChatContext {
    /// Conversation history, oldest first
    pub transcript: RwSignal<Transcript>,
    /// Waitlist wizard / canned responder
    pub wizard: RwSignal<WaitlistWizard>,
    /// Pending input, fed by typing or voice capture
    pub draft: RwSignal<String>,
    /// Whether the floating widget is shown
    pub widget_open: RwSignal<bool>,
}

impl ChatContext {
    /// Submit the pending draft as one visitor turn.
    ///
    /// Whitespace-only drafts are discarded here, so the wizard never sees
    /// blank text. Non-blank drafts pass through verbatim, untrimmed.
    pub fn submit(&self) {
        let draft = self.draft.get_untracked();
        if draft.trim().is_empty() {
            return;
        }

        self.transcript
            .update(|transcript| transcript.append(ChatTurn::user(draft.clone())));
        self.draft.set(String::new());

        let mut replies = Vec::new();
        self.wizard
            .update(|wizard| replies = wizard.handle(&draft));
        self.transcript.update(|transcript| {
            for reply in replies {
                transcript.append(ChatTurn::bot(reply));
            }
        });
    }
}

/// Provide chat context to the application
pub fn provide_chat_context() -> ChatContext {
    let ctx = ChatContext {
        transcript: RwSignal::new(Transcript::with_greeting()),
        wizard: RwSignal::new(WaitlistWizard::new()),
        draft: RwSignal::new(String::new()),
        widget_open: RwSignal::new(false),
    };

    provide_context(ctx);

    ctx
}

/// Use chat context from anywhere in the component tree
pub fn use_chat_context() -> ChatContext {
    use_context::<ChatContext>().expect("ChatContext should be provided")
}

/// Message list plus input row. Used inside the demo section and the
/// floating widget; both render the same shared conversation.
#[component]
pub fn ChatPanel(
    /// Placeholder for the input field
    #[prop(default = "Type your message...")]
    placeholder: &'static str,
) -> impl IntoView {
    let chat = use_chat_context();
    let voice = use_voice_context();

    view! {
        <div class="h-96 p-4 overflow-y-auto bg-gray-50 dark:bg-gray-900">
            <For
                each=move || chat.transcript.get().into_turns().into_iter().enumerate()
                key=|(i, _)| *i
                children=move |(_, turn)| {
                    let row = if turn.is_bot {
                        "flex justify-start mb-4"
                    } else {
                        "flex justify-end mb-4"
                    };
                    let bubble = if turn.is_bot {
                        "rounded-lg px-4 py-2 max-w-[80%] whitespace-pre-wrap bg-white dark:bg-gray-800 dark:text-gray-100 shadow-md"
                    } else {
                        "rounded-lg px-4 py-2 max-w-[80%] whitespace-pre-wrap bg-blue-600 dark:bg-blue-500 text-white"
                    };

                    view! {
                        <div class=row>
                            <div class=bubble>{turn.text}</div>
                        </div>
                    }
                }
            />
        </div>
        <div class="p-4 border-t dark:border-gray-700">
            <div class="flex space-x-2">
                <input
                    type="text"
                    class="flex-1 px-4 py-2 border rounded-full focus:outline-none focus:border-blue-600 dark:bg-gray-800 dark:border-gray-600 dark:text-white"
                    placeholder=placeholder
                    prop:value=move || chat.draft.get()
                    on:input=move |ev| chat.draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            chat.submit();
                        }
                    }
                />
                <button
                    class=move || {
                        if voice.listening.get() {
                            "p-2 rounded-full text-red-600 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
                        } else {
                            "p-2 rounded-full text-blue-600 dark:text-blue-400 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
                        }
                    }
                    on:click=move |_| voice.toggle()
                    title="Toggle voice input"
                >
                    {move || {
                        if voice.listening.get() {
                            view! { <Icon name=icons::MIC_OFF class="w-6 h-6"/> }
                        } else {
                            view! { <Icon name=icons::MIC class="w-6 h-6"/> }
                        }
                    }}
                </button>
                <button
                    class="p-2 text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 transition-colors"
                    on:click=move |_| chat.submit()
                    title="Send message"
                >
                    <Icon name=icons::SEND class="w-6 h-6"/>
                </button>
            </div>
        </div>
    }
}

/// Floating assistant widget, opened from the hero call-to-action
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = use_chat_context();

    view! {
        <Show when=move || chat.widget_open.get()>
            <div class="fixed bottom-4 right-4 w-96 max-w-[calc(100vw-2rem)] bg-white dark:bg-gray-800 rounded-xl shadow-2xl overflow-hidden z-50">
                <div class="bg-blue-600 dark:bg-blue-700 p-4 text-white flex items-center justify-between">
                    <div class="flex items-center">
                        <Icon name=icons::BOT class="w-6 h-6 mr-2"/>
                        <span class="font-semibold">"AI Buddy Assistant"</span>
                    </div>
                    <button
                        class="text-white hover:text-gray-200 transition-colors"
                        on:click=move |_| chat.widget_open.set(false)
                        title="Close"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>
                <ChatPanel />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context(draft: &str) -> ChatContext {
        ChatContext {
            transcript: RwSignal::new(Transcript::with_greeting()),
            wizard: RwSignal::new(WaitlistWizard::new()),
            draft: RwSignal::new(draft.to_string()),
            widget_open: RwSignal::new(false),
        }
    }

    #[test]
    fn test_submit_appends_user_turn_then_reply() {
        let ctx = test_context("Alex");

        ctx.submit();

        // Greeting, the visitor's name, the email prompt.
        let turns = ctx.transcript.get_untracked().into_turns();
        assert_eq!(turns.len(), 3);
        assert!(!turns[1].is_bot);
        assert_eq!(turns[1].text, "Alex");
        assert!(turns[2].is_bot);
        assert_eq!(ctx.draft.get_untracked(), "");
    }

    #[test]
    fn test_blank_draft_never_reaches_the_wizard() {
        let ctx = test_context("   ");

        ctx.submit();

        assert_eq!(ctx.transcript.get_untracked().len(), 1);
        assert_eq!(
            ctx.wizard.get_untracked().step(),
            crate::core::WizardStep::AskName
        );
        // The draft is kept, not swallowed.
        assert_eq!(ctx.draft.get_untracked(), "   ");
    }

    #[test]
    fn test_transcript_grows_with_every_submission() {
        let ctx = test_context("");
        for input in ["Alex", "bad-email", "a@b.com", "555-1234", "automation"] {
            let before = ctx.transcript.get_untracked().len();
            ctx.draft.set(input.to_string());
            ctx.submit();
            assert!(ctx.transcript.get_untracked().len() > before);
        }
    }
}
