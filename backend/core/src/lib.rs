pub mod error;
pub mod traits;
pub mod types;

pub use error::AnalysisError;
pub use traits::PaceAnalyzer;
pub use types::RunWalkAnalysis;
