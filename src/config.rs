//! Page Configuration
//!
//! Compile-time page copy and endpoint paths.

/// Greeting endpoint, relative to the page origin
pub const HELLO_ENDPOINT: &str = "/api/hello";

pub const TITLE: &str = "IceBrew";
pub const SUBTITLE: &str = "Spring Boot + Vite + React";
pub const FOOTER: &str = "Built with ❤️ using IceBrew";

/// Status card copy
pub const LOADING_TEXT: &str = "Loading...";
pub const FAILED_TEXT: &str = "Failed to connect to backend";

/// Counter card copy
pub const COUNTER_HINT: &str = "Click the button to test Hot Module Replacement";
pub const COUNTER_FOOTNOTE: &str =
    "Try editing this component and save - the state will be preserved!";

/// Feature bullets shown in the Features card
pub const FEATURES: &[&str] = &[
    "✅ Vite Dev Server with HMR",
    "✅ React 18 with TypeScript",
    "✅ Spring Boot 3.2 Backend",
    "✅ Auto-proxy API requests",
    "✅ Production build support",
];
