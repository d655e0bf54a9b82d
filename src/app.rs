use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::ui::chat::provide_chat_context;
use crate::ui::pages::LandingPage;
use crate::ui::theme::provide_theme_context;
use crate::ui::voice::provide_voice_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let _theme = provide_theme_context();
    let chat = provide_chat_context();
    let voice = provide_voice_context();

    // Voice capture feeds the same input slot as manual typing: any
    // non-empty live transcript replaces the pending draft. The wizard
    // itself never learns where the text came from.
    Effect::new(move |_| {
        let live = voice.live_transcript.get();
        if !live.is_empty() {
            chat.draft.set(live);
        }
    });

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/aibuddy.css"/>

        // sets the document title
        <Title text="AI Buddy - Your Next-Gen AI Assistant"/>

        // main application content
        <LandingPage />
    }
}
