//! Vision backend for pace-graph analysis.
//!
//! Sends a workout screenshot to the Gemini vision API with a fixed
//! instruction prompt and turns the model's reply into a `RunWalkAnalysis`.

pub mod gemini;
pub mod prompt;
pub mod sanitize;

pub use gemini::GeminiAnalyzer;
pub use prompt::ANALYSIS_PROMPT;
pub use sanitize::extract_json;
