// Version information for the EyeGuide Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-assistive-vision-2026-08-29";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-29";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "scene-description",
    "text-extraction",
    "obstacle-identification",
    "personalized-assistance",
    "speech-narration",
    "fixed-overlay-placeholder",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("EyeGuide Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
