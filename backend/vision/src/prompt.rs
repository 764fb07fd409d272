//! Fixed instruction prompt sent alongside every pace-graph image.

/// The model is asked for the exact JSON shape of `RunWalkAnalysis`; anything
/// extra it emits (fences, prose) is handled by the sanitizer.
pub const ANALYSIS_PROMPT: &str = r#"Analyze this running pace graph from Zepp Life (MI Band).

Your task:
1. Extract all pace data points from the graph (time vs pace)
2. Intelligently determine the threshold pace that separates running from walking by analyzing the distribution of pace values (look for bimodal distribution or natural clustering)
3. Calculate the run-to-walk ratio
4. Provide total running time, walking time, running distance, and walking distance

Respond in this EXACT JSON format with no markdown formatting:
{
  "ratio": "3:1",
  "runningPercentage": 75,
  "walkingPercentage": 25,
  "runningTime": "20m 45s",
  "walkingTime": "6m 52s",
  "runningDistance": "3.2 km",
  "walkingDistance": "0.8 km",
  "thresholdPace": "7:30 min/km"
}"#;
