use thiserror::Error;

/// Failures produced while analyzing a pace graph through the vision provider.
///
/// Every variant's `Display` text is what the API caller ultimately sees in
/// the `{ "error": ... }` body, so the messages mirror the upstream wording.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The upstream service returned an explicit error payload.
    #[error("{0}")]
    Upstream(String),

    /// The upstream response did not contain the expected text part.
    #[error("Invalid response from API")]
    MalformedResponse,

    /// The sanitized model output was not valid analysis JSON.
    #[error("{0}")]
    Parse(String),

    /// The outbound HTTP call itself failed.
    #[error("{0}")]
    Transport(String),
}
