//! Gemini vision provider.
//!
//! One `generateContent` call per analysis: prompt text plus the inline
//! base64 image. No retries and no local timeout; the caller gets whatever
//! the single call produced.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use stridesplit_core::{AnalysisError, PaceAnalyzer, RunWalkAnalysis};

use crate::prompt::ANALYSIS_PROMPT;
use crate::sanitize;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Gemini-backed pace-graph analyzer.
pub struct GeminiAnalyzer {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiAnalyzer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<UpstreamError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct UpstreamError {
    message: Option<String>,
}

/// Pull the first text part out of the nested response shape.
///
/// An `error` field in the body is authoritative even on HTTP 200; the
/// upstream reports quota and auth failures that way.
fn first_candidate_text(response: GenerateResponse) -> Result<String, AnalysisError> {
    if let Some(err) = response.error {
        return Err(AnalysisError::Upstream(
            err.message
                .unwrap_or_else(|| "API error occurred".to_string()),
        ));
    }

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.is_empty())
        .ok_or(AnalysisError::MalformedResponse)
}

/// Sanitize the model output and parse it into the analysis contract.
fn parse_analysis(raw: &str) -> Result<RunWalkAnalysis, AnalysisError> {
    let cleaned = sanitize::extract_json(raw);
    serde_json::from_str(&cleaned).map_err(|e| AnalysisError::Parse(e.to_string()))
}

#[async_trait]
impl PaceAnalyzer for GeminiAnalyzer {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn analyze(&self, image_base64: &str) -> Result<RunWalkAnalysis, AnalysisError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        // MIME type is fixed to JPEG regardless of the uploaded format.
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: Some(ANALYSIS_PROMPT.to_string()),
                        inline_data: None,
                    },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: image_base64.to_string(),
                        }),
                    },
                ],
            }],
        };

        info!(model = %self.model, "Sending pace graph to Gemini");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let text = first_candidate_text(parsed)?;
        debug!(chars = text.len(), "Received model output");

        parse_analysis(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ANALYSIS_JSON: &str = r#"{
  "ratio": "3:1",
  "runningPercentage": 75,
  "walkingPercentage": 25,
  "runningTime": "20m 45s",
  "walkingTime": "6m 52s",
  "runningDistance": "3.2 km",
  "walkingDistance": "0.8 km",
  "thresholdPace": "7:30 min/km"
}"#;

    fn response_with_text(text: &str) -> GenerateResponse {
        serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
        .unwrap()
    }

    #[test]
    fn extracts_first_candidate_text() {
        let text = first_candidate_text(response_with_text("hello")).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn upstream_error_message_is_passed_through() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "error": { "message": "quota exceeded", "code": 429 }
        }))
        .unwrap();
        let err = first_candidate_text(response).unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn upstream_error_without_message_gets_default() {
        let response: GenerateResponse =
            serde_json::from_value(json!({ "error": {} })).unwrap();
        let err = first_candidate_text(response).unwrap_err();
        assert_eq!(err.to_string(), "API error occurred");
    }

    #[test]
    fn missing_text_is_malformed() {
        let response: GenerateResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();
        let err = first_candidate_text(response).unwrap_err();
        assert_eq!(err.to_string(), "Invalid response from API");

        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [] } }]
        }))
        .unwrap();
        assert!(matches!(
            first_candidate_text(response),
            Err(AnalysisError::MalformedResponse)
        ));
    }

    #[test]
    fn empty_text_is_malformed() {
        assert!(matches!(
            first_candidate_text(response_with_text("")),
            Err(AnalysisError::MalformedResponse)
        ));
    }

    #[test]
    fn parses_exact_contract_json() {
        let analysis = parse_analysis(ANALYSIS_JSON).unwrap();
        assert_eq!(analysis.ratio, "3:1");
        assert_eq!(analysis.running_percentage, 75.0);
        assert_eq!(analysis.walking_distance, "0.8 km");
    }

    #[test]
    fn parses_fenced_output() {
        let fenced = format!("```json\n{ANALYSIS_JSON}\n```");
        let analysis = parse_analysis(&fenced).unwrap();
        assert_eq!(analysis, parse_analysis(ANALYSIS_JSON).unwrap());
    }

    #[test]
    fn parses_object_embedded_in_prose() {
        let chatty = format!("Sure! Based on the graph:\n{ANALYSIS_JSON}\nHope that helps.");
        let analysis = parse_analysis(&chatty).unwrap();
        assert_eq!(analysis.threshold_pace, "7:30 min/km");
    }

    #[test]
    fn unparseable_output_is_a_parse_error() {
        assert!(matches!(
            parse_analysis("I could not read the graph."),
            Err(AnalysisError::Parse(_))
        ));
    }
}
