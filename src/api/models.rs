// src/api/models.rs
use serde::{Deserialize, Serialize};

/// Response of the symptom analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Expected to be "low", "medium" or "high"; anything else is kept as sent.
    pub severity: String,
    pub analysis: String,
    pub recommendations: Vec<String>,
}

/// Label plus suggested display color, shared by the heart, diabetes and pregnancy endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    // The pregnancy endpoint calls this risk_level
    #[serde(alias = "risk_level")]
    pub prediction_text: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pregnancy_response_alias() {
        let result: PredictionResult =
            serde_json::from_str(r##"{"risk_level": "Medium Risk", "color": "#FF7518"}"##).unwrap();
        assert_eq!(result.prediction_text, "Medium Risk");
        assert_eq!(result.color, "#FF7518");
    }

    #[test]
    fn test_analysis_result_requires_recommendations() {
        let parsed = serde_json::from_str::<AnalysisResult>(r#"{"severity": "low", "analysis": "ok"}"#);
        assert!(parsed.is_err());
    }
}
