//! Landing page component
//!
//! A single scroll page for AI Buddy featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with waitlist and demo buttons
//! - Features grid with the product's nine benefit cards
//! - Demo section embedding the live chat assistant
//! - Contact section and footer
//! - Floating chat widget opened from the hero call-to-action

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{
    CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, FEATURES, LAUNCH_WINDOW,
};
use crate::ui::chat::{ChatPanel, ChatWidget, use_chat_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        // SEO Meta Tags
        <SeoMeta />

        <div class="min-h-screen bg-gradient-to-b from-blue-50 via-white to-blue-50 dark:from-gray-900 dark:via-gray-900 dark:to-gray-900 overflow-x-hidden">
            <Header />

            <HeroSection />

            <FeaturesSection />

            <DemoSection />

            <ContactSection />

            <Footer />

            // Floating assistant, opened from the hero
            <ChatWidget />

            // CSS Animations
            <LandingStyles />

            // Intersection Observer for scroll animations
            <ScrollAnimationScript />
        </div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50 shadow-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="#" class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                        <Icon name=icons::BOT class="w-8 h-8 text-blue-600 dark:text-blue-400" />
                        <span class="text-2xl font-bold landing-gradient-text">"AI Buddy"</span>
                    </a>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-6">
                            <NavLink href="#features" label="Features" />
                            <NavLink href="#demo" label="Demo" />
                            <NavLink href="#contact" label="Contact" />
                        </nav>
                        <ThemeToggle />
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! {
                                    <Icon name=icons::X class="w-6 h-6 text-gray-600 dark:text-gray-300" />
                                }
                            } else {
                                view! {
                                    <Icon name=icons::MENU class="w-6 h-6 text-gray-600 dark:text-gray-300" />
                                }
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <div class="py-4 space-y-4 border-t border-gray-200/50 dark:border-gray-700/50">
                        <nav class="flex flex-col gap-2">
                            <MobileNavLink href="#features" label="Features" on_select=move || set_mobile_menu_open.set(false) />
                            <MobileNavLink href="#demo" label="Demo" on_select=move || set_mobile_menu_open.set(false) />
                            <MobileNavLink href="#contact" label="Contact" on_select=move || set_mobile_menu_open.set(false) />
                            <ThemeToggle />
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Desktop navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="text-sm font-medium text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors"
        >
            {label}
        </a>
    }
}

/// Mobile navigation link that collapses the menu on selection
#[component]
fn MobileNavLink(
    href: &'static str,
    label: &'static str,
    on_select: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="block px-4 py-2 text-sm font-medium text-gray-600 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 hover:bg-gray-100 dark:hover:bg-gray-800 rounded-lg transition-colors"
            on:click=move |_| on_select()
        >
            {label}
        </a>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors text-gray-600 dark:text-gray-300
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! {
                        <Icon name=icons::SUN class="w-5 h-5 text-yellow-400" />
                    }
                } else {
                    view! {
                        <Icon name=icons::MOON class="w-5 h-5" />
                    }
                }
            }}
        </button>
    }
}

/// Hero section with the waitlist call-to-action
#[component]
fn HeroSection() -> impl IntoView {
    let chat = use_chat_context();

    view! {
        <section class="pt-32 pb-20 relative">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-center">
                    <div class="inline-block mb-4 px-4 py-1 bg-blue-100 dark:bg-blue-900 rounded-full landing-fade-in-up">
                        <span class="text-blue-600 dark:text-blue-400 font-semibold flex items-center">
                            <Icon name=icons::SPARKLES class="h-4 w-4 mr-2" />
                            {format!("Launching {}", LAUNCH_WINDOW)}
                        </span>
                    </div>
                    <h1 class="text-5xl md:text-6xl font-bold mb-6 landing-gradient-text landing-fade-in-up landing-delay-200">
                        "Your Next-Gen AI Assistant"
                    </h1>
                    <p class="text-xl text-gray-600 dark:text-gray-300 mb-8 max-w-2xl mx-auto landing-fade-in-up landing-delay-200">
                        "More than just code - your complete digital companion that thinks, creates, and works alongside you."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 landing-fade-in-up landing-delay-400">
                        <button
                            class="bg-blue-600 dark:bg-blue-500 text-white px-8 py-3 rounded-full text-lg font-semibold hover:bg-blue-700 dark:hover:bg-blue-600 transition-all hover:shadow-lg hover:scale-105 flex items-center"
                            on:click=move |_| chat.widget_open.set(true)
                            aria-label="Join the AI Buddy waitlist"
                        >
                            "Join Waitlist"
                            <Icon name=icons::ARROW_RIGHT class="ml-2 h-5 w-5" />
                        </button>
                        <a
                            href="#demo"
                            class="border-2 border-blue-600 dark:border-blue-400 text-blue-600 dark:text-blue-400 px-8 py-3 rounded-full text-lg font-semibold hover:bg-blue-50 dark:hover:bg-blue-900/50 hover:scale-105 transition-all"
                            aria-label="Try the live demo"
                        >
                            "Watch Demo"
                        </a>
                    </div>

                    // Scroll indicator
                    <div class="mt-16 flex justify-center animate-bounce">
                        <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 text-gray-400 dark:text-gray-500" />
                    </div>
                </div>
            </div>

            // Background decoration
            <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-purple-500/5 rounded-full blur-3xl"></div>
            </div>
        </section>
    }
}

/// Features grid section
#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-20 bg-white dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4">
                <h2 class="text-4xl font-bold text-center mb-12 landing-gradient-text landing-scroll-animate">
                    "Powerful Features"
                </h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <FeatureCard
                                    icon=feature.icon
                                    title=feature.title
                                    description=feature.description
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate bg-white dark:bg-gray-900 p-8 rounded-xl shadow-lg hover:shadow-2xl hover:-translate-y-1 transition-all duration-300">
            <div class="w-12 h-12 rounded-lg bg-blue-600/10 dark:bg-blue-400/10 flex items-center justify-center mb-4">
                <FeatureIcon icon=icon />
            </div>
            <h3 class="text-xl font-bold mb-2 text-gray-900 dark:text-white">{title}</h3>
            <p class="text-gray-600 dark:text-gray-300">{description}</p>
        </div>
    }
}

/// Demo section with the embedded chat assistant
#[component]
fn DemoSection() -> impl IntoView {
    view! {
        <section id="demo" class="py-20 dark:bg-gray-900">
            <div class="max-w-7xl mx-auto px-4">
                <h2 class="text-4xl font-bold text-center mb-12 landing-gradient-text landing-scroll-animate">
                    "Try AI Buddy"
                </h2>
                <div class="max-w-2xl mx-auto">
                    <div class="bg-white dark:bg-gray-800 rounded-xl shadow-2xl overflow-hidden landing-scroll-animate">
                        <div class="bg-blue-600 dark:bg-blue-700 p-4 text-white flex items-center">
                            <Icon name=icons::BOT class="w-6 h-6 mr-2" />
                            <span class="font-semibold">"AI Buddy Demo"</span>
                        </div>
                        <ChatPanel placeholder="Try saying 'What can you do?' or 'Show me a demo'" />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Contact section component
#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4">
                <h2 class="text-4xl font-bold text-center mb-12 landing-gradient-text landing-scroll-animate">
                    "Get in Touch"
                </h2>
                <div class="grid md:grid-cols-3 gap-8">
                    <ContactCard icon=icons::MAIL title="Email Us" value=CONTACT_EMAIL />
                    <ContactCard icon=icons::PHONE title="Call Us" value=CONTACT_PHONE />
                    <ContactCard icon=icons::MAP_PIN title="Visit Us" value=CONTACT_ADDRESS />
                </div>
            </div>
        </section>
    }
}

/// Contact card component
#[component]
fn ContactCard(icon: &'static str, title: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate text-center bg-white dark:bg-gray-900 p-8 rounded-xl shadow-lg hover:scale-105 transition-transform">
            <div class="flex justify-center mb-4">
                <Icon name=icon class="h-8 w-8 text-blue-600 dark:text-blue-400" />
            </div>
            <h3 class="font-bold mb-2 text-gray-900 dark:text-white">{title}</h3>
            <p class="text-gray-600 dark:text-gray-300">{value}</p>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white dark:bg-gray-900 py-12">
            <div class="max-w-7xl mx-auto px-4 text-center">
                <div class="flex items-center justify-center gap-2 mb-4">
                    <Icon name=icons::BOT class="w-6 h-6 text-blue-600 dark:text-blue-400" />
                    <span class="font-bold landing-gradient-text">"AI Buddy"</span>
                </div>
                <p class="text-gray-600 dark:text-gray-400">
                    "© 2025 AI Buddy. All rights reserved."
                </p>
            </div>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="AI Buddy - Your Next-Gen AI Assistant" />

        // Basic meta tags
        <Meta name="description" content="More than just code - AI Buddy is your complete digital companion that thinks, creates, and works alongside you. Join the waitlist today." />
        <Meta name="keywords" content="AI assistant, code generation, voice commands, workflow automation, developer tools, digital companion" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://aibuddy.app/" />
        <Meta property="og:title" content="AI Buddy - Your Next-Gen AI Assistant" />
        <Meta property="og:description" content="More than just code - your complete digital companion that thinks, creates, and works alongside you." />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://aibuddy.app/" />
        <Meta property="twitter:title" content="AI Buddy - Your Next-Gen AI Assistant" />
        <Meta property="twitter:description" content="More than just code - your complete digital companion that thinks, creates, and works alongside you." />

        // Canonical URL
        <Link rel="canonical" href="https://aibuddy.app/" />
    }
}

/// Feature icon component
#[component]
fn FeatureIcon(icon: &'static str) -> impl IntoView {
    let svg_content = match icon {
        "code" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4" />
        },
        "brain" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z" />
        },
        "robot" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M12 5V3m0 2a1.5 1.5 0 100-3 1.5 1.5 0 000 3zM5 10a2 2 0 012-2h10a2 2 0 012 2v7a2 2 0 01-2 2H7a2 2 0 01-2-2v-7zM9 13h.01M15 13h.01M9.5 16.5h5" />
        },
        "database" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M4 7v10c0 2.21 3.582 4 8 4s8-1.79 8-4V7M4 7c0 2.21 3.582 4 8 4s8-1.79 8-4M4 7c0-2.21 3.582-4 8-4s8 1.79 8 4" />
        },
        "workflow" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15" />
        },
        "globe" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9c1.657 0 3-4.03 3-9s-1.343-9-3-9m0 18c-1.657 0-3-4.03-3-9s1.343-9 3-9m-9 9a9 9 0 019-9" />
        },
        "lock" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z" />
        },
        "cloud" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M3 15a4 4 0 004 4h9a5 5 0 10-.1-9.999 5.002 5.002 0 10-9.78 2.096A4.001 4.001 0 003 15z" />
        },
        "cpu" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M9 3v2m6-2v2M9 19v2m6-2v2M5 9H3m2 6H3m18-6h-2m2 6h-2M7 19h10a2 2 0 002-2V7a2 2 0 00-2-2H7a2 2 0 00-2 2v10a2 2 0 002 2zM9 9h6v6H9V9z" />
        },
        _ => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z" />
        },
    };

    view! {
        <svg class="w-6 h-6 text-blue-600 dark:text-blue-400" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            {svg_content}
        </svg>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Gradient headline text */
            .landing-gradient-text {
                background-image: linear-gradient(to right, #2563eb, #7c3aed);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
