use async_trait::async_trait;

use crate::error::AnalysisError;
use crate::types::RunWalkAnalysis;

/// Trait for vision providers that turn a pace-graph image into a run/walk
/// analysis.
///
/// The gateway only ever talks to this trait; the concrete Gemini client
/// lives in the vision crate and tests substitute a mock.
#[async_trait]
pub trait PaceAnalyzer: Send + Sync {
    /// Provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Analyze a base64-encoded pace graph image.
    async fn analyze(&self, image_base64: &str) -> Result<RunWalkAnalysis, AnalysisError>;
}
