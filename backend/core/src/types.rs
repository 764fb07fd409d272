use serde::{Deserialize, Serialize};

/// Run/walk breakdown of a single workout, as produced by the vision model.
///
/// All values come straight from the model; nothing here is computed locally.
/// Percentages are numeric, everything else is free-form display text
/// ("3:1", "20m 45s", "3.2 km", "7:30 min/km").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunWalkAnalysis {
    /// Run-to-walk ratio, e.g. "3:1".
    pub ratio: String,
    pub running_percentage: f64,
    pub walking_percentage: f64,
    pub running_time: String,
    pub walking_time: String,
    pub running_distance: String,
    pub walking_distance: String,
    /// Pace separating running from walking, e.g. "7:30 min/km".
    pub threshold_pace: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_wire_format() {
        let value = json!({
            "ratio": "3:1",
            "runningPercentage": 75,
            "walkingPercentage": 25,
            "runningTime": "20m 45s",
            "walkingTime": "6m 52s",
            "runningDistance": "3.2 km",
            "walkingDistance": "0.8 km",
            "thresholdPace": "7:30 min/km"
        });
        let analysis: RunWalkAnalysis = serde_json::from_value(value).unwrap();
        assert_eq!(analysis.ratio, "3:1");
        assert_eq!(analysis.running_percentage, 75.0);
        assert_eq!(analysis.threshold_pace, "7:30 min/km");
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let analysis = RunWalkAnalysis {
            ratio: "2:1".into(),
            running_percentage: 66.7,
            walking_percentage: 33.3,
            running_time: "10m 0s".into(),
            walking_time: "5m 0s".into(),
            running_distance: "1.5 km".into(),
            walking_distance: "0.4 km".into(),
            threshold_pace: "8:00 min/km".into(),
        };
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["runningPercentage"], 66.7);
        assert_eq!(value["thresholdPace"], "8:00 min/km");
        assert!(value.get("running_percentage").is_none());
    }
}
