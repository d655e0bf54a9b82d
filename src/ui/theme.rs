//! Theme context for the dark/light color scheme
//!
//! The effective scheme is seeded once at startup from the browser's
//! prefers-color-scheme and flipped by the header toggle afterwards. It is
//! purely cosmetic: nothing else in the app reads it.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Whether the current theme is dark
    pub is_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Flip between dark and light
    pub fn toggle(&self) {
        self.is_dark.update(|v| *v = !*v);
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(html) = document.document_element() {
                        let class_list = html.class_list();
                        if self.is_dark.get_untracked() {
                            let _ = class_list.add_1("dark");
                        } else {
                            let _ = class_list.remove_1("dark");
                        }
                    }
                }
            }
        }
    }
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        is_dark: RwSignal::new(detect_system_prefers_dark()),
    };

    // Apply theme class initially and on changes
    #[cfg(not(feature = "ssr"))]
    {
        let ctx_clone = ctx;
        Effect::new(move |_| {
            // Subscribe to is_dark changes
            let _ = ctx_clone.is_dark.get();
            ctx_clone.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
