//! Static marketing copy for the AI Buddy landing page.
//!
//! Everything the page and the chat assistant say about the product lives
//! here, so the UI components and the responder quote the same strings.

/// A feature-grid entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Icon name resolved by the landing page's icon renderer
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The nine cards shown in the features grid.
pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "code",
        title: "Instant Code Generation",
        description: "Generate production-ready code with simple voice commands",
    },
    Feature {
        icon: "brain",
        title: "AI-Powered Development",
        description: "Complete applications built and deployed with natural language",
    },
    Feature {
        icon: "robot",
        title: "Intelligent Assistant",
        description: "24/7 AI companion for all your development needs",
    },
    Feature {
        icon: "database",
        title: "Smart Data Management",
        description: "Automated database design and optimization",
    },
    Feature {
        icon: "workflow",
        title: "Workflow Automation",
        description: "Automate repetitive tasks and complex processes",
    },
    Feature {
        icon: "globe",
        title: "Multi-Platform Support",
        description: "Deploy to any platform with zero configuration",
    },
    Feature {
        icon: "lock",
        title: "Security First",
        description: "Built-in security best practices and compliance",
    },
    Feature {
        icon: "cloud",
        title: "Cloud Integration",
        description: "Seamless integration with major cloud providers",
    },
    Feature {
        icon: "cpu",
        title: "Performance Optimization",
        description: "Automatic code optimization and performance tuning",
    },
];

/// The twelve demo commands the assistant can rattle off.
///
/// The waitlist confirmation quotes the first [`CONFIRMATION_PREVIEW`]
/// entries; the "features" keyword response quotes all of them.
pub const DEMO_COMMANDS: &[&str] = &[
    "🚀 One-command deployments - 'Deploy my React app to production'",
    "💻 Code generation - 'Create a login form with validation'",
    "🎨 UI/UX automation - 'Design a responsive dashboard'",
    "📊 Data analysis - 'Analyze my user engagement data'",
    "📝 Content creation - 'Write a technical blog post about React hooks'",
    "📅 Calendar management - 'Schedule team meetings for next week'",
    "🤖 Task automation - 'Set up CI/CD pipeline for my project'",
    "🔍 Research assistance - 'Find best practices for API security'",
    "📱 Mobile development - 'Create a React Native app template'",
    "🔧 Debug assistance - 'Help me fix this memory leak'",
    "📚 Documentation - 'Generate API documentation from my code'",
    "🌐 SEO optimization - 'Optimize my website for search engines'",
];

/// How many demo commands the waitlist confirmation previews.
pub const CONFIRMATION_PREVIEW: usize = 5;

/// Launch window quoted in the hero badge and the waitlist confirmation.
pub const LAUNCH_WINDOW: &str = "December 2025";

/// The bot turn every conversation starts with.
pub const GREETING: &str = "Hi! I'm your AI Buddy. I can help you with development, automation, and much more! Want to learn about our features or join the waitlist?";

// Contact section details.
pub const CONTACT_EMAIL: &str = "saswatdashai577@gmail.com";
pub const CONTACT_PHONE: &str = "8056198316";
pub const CONTACT_ADDRESS: &str = "Gce Keonjhar Odisha 758002";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_grid_size() {
        assert_eq!(FEATURES.len(), 9);
    }

    #[test]
    fn test_demo_command_count() {
        assert_eq!(DEMO_COMMANDS.len(), 12);
        assert!(CONFIRMATION_PREVIEW < DEMO_COMMANDS.len());
    }

    #[test]
    fn test_feature_icons_are_unique() {
        for (i, feature) in FEATURES.iter().enumerate() {
            assert!(
                FEATURES[i + 1..].iter().all(|f| f.icon != feature.icon),
                "duplicate icon {}",
                feature.icon
            );
        }
    }
}
