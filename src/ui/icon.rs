use leptos::prelude::*;

/// Inline SVG icon rendered from a well-known name.
///
/// Keeping the path data in one place means every section of the page pulls
/// from the same icon set instead of embedding ad-hoc SVG.
#[component]
pub fn Icon(
    /// Icon name from [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon_path(name) />
        </svg>
    }
}

/// Outline path data for each icon name. Unknown names fall back to the
/// lightning bolt.
fn icon_path(name: &str) -> &'static str {
    match name {
        icons::BOT => {
            "M12 5V3m0 2a1.5 1.5 0 100-3 1.5 1.5 0 000 3zM5 10a2 2 0 012-2h10a2 2 0 012 2v7a2 2 0 01-2 2H7a2 2 0 01-2-2v-10zM9 13h.01M15 13h.01M9.5 16.5h5"
        }
        icons::SEND => "M12 19l9 2-9-18-9 18 9-2zm0 0v-8",
        icons::MIC => {
            "M19 11a7 7 0 01-7 7m0 0a7 7 0 01-7-7m7 7v4m0 0H8m4 0h4m-4-8a3 3 0 01-3-3V5a3 3 0 116 0v6a3 3 0 01-3 3z"
        }
        icons::MIC_OFF => {
            "M19 11a7 7 0 01-7 7m0 0a7 7 0 01-7-7m7 7v4m0 0H8m4 0h4m-4-8a3 3 0 01-3-3V5a3 3 0 116 0v6a3 3 0 01-3 3zM4 4l16 16"
        }
        icons::SUN => {
            "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
        }
        icons::MOON => {
            "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"
        }
        icons::MAIL => {
            "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
        }
        icons::PHONE => {
            "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 7V5z"
        }
        icons::MAP_PIN => {
            "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0zM15 11a3 3 0 11-6 0 3 3 0 016 0z"
        }
        icons::SPARKLES => {
            "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z"
        }
        icons::ARROW_RIGHT => "M14 5l7 7m0 0l-7 7m7-7H3",
        icons::CHEVRON_DOWN => "M19 9l-7 7-7-7",
        icons::CHECK => "M5 13l4 4L19 7",
        icons::X => "M6 18L18 6M6 6l12 12",
        icons::MENU => "M4 6h16M4 12h16M4 18h16",
        _ => "M13 10V3L4 14h7v7l9-11h-7z",
    }
}

/// Icon names used across the page
#[allow(dead_code)]
pub mod icons {
    pub const BOT: &str = "bot";
    pub const SEND: &str = "send";
    pub const MIC: &str = "mic";
    pub const MIC_OFF: &str = "mic-off";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const SPARKLES: &str = "sparkles";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const MENU: &str = "menu";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons_have_distinct_paths() {
        let names = [
            icons::BOT,
            icons::SEND,
            icons::MIC,
            icons::SUN,
            icons::MOON,
            icons::MAIL,
            icons::PHONE,
            icons::MAP_PIN,
        ];
        for (i, name) in names.iter().enumerate() {
            assert!(
                names[i + 1..].iter().all(|n| icon_path(n) != icon_path(name)),
                "duplicate path for {name}"
            );
        }
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(icon_path("nope"), icon_path("also-nope"));
    }
}
