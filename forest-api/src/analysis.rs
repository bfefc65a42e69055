//! Client for the analysis/chat backend.
//!
//! Two endpoints: `POST /api/analyze` turns a freshly fetched record into a
//! narrative that seeds the chat, and `POST /api/chat` answers follow-up
//! questions with the record as context. Both are best-effort enrichment;
//! callers swallow failures rather than surfacing dashboard errors.

use crate::endpoints;
use crate::error::ApiError;
use forest_core::ForestRecord;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    location: &'a str,
    stats: &'a forest_core::ForestStats,
    yearly_data: &'a forest_core::YearlyData,
    analysis: &'a forest_core::ForestAnalysis,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    analysis: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    context: ChatContext<'a>,
}

#[derive(Serialize)]
struct ChatContext<'a> {
    location: &'a str,
    #[serde(rename = "forestData")]
    forest_data: &'a ForestRecord,
}

#[derive(Deserialize)]
struct ChatResponse {
    response: String,
}

/// Typed wrapper over the analysis backend.
#[derive(Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base: String,
}

impl AnalysisClient {
    pub fn new(base: impl Into<String>) -> Self {
        AnalysisClient {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    /// Client against the development backend.
    pub fn default_backend() -> Self {
        Self::new(endpoints::ANALYSIS_BASE)
    }

    /// Request a narrative analysis of a fetched record.
    pub async fn analyze(&self, record: &ForestRecord) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base, endpoints::ANALYZE_PATH);
        let request = AnalyzeRequest {
            location: &record.location,
            stats: &record.stats,
            yearly_data: &record.yearly_data,
            analysis: &record.analysis,
        };
        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        let parsed: AnalyzeResponse = serde_json::from_str(&body)?;
        Ok(parsed.analysis)
    }

    /// Relay one chat message with the record as context.
    ///
    /// The backend answers either `{"response": "..."}` or a plain-text
    /// body depending on deployment; both are accepted.
    pub async fn chat(&self, message: &str, record: &ForestRecord) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base, endpoints::CHAT_PATH);
        let request = ChatRequest {
            message,
            context: ChatContext {
                location: &record.location,
                forest_data: record,
            },
        };
        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        match serde_json::from_str::<ChatResponse>(&body) {
            Ok(parsed) => Ok(parsed.response),
            Err(_) => Ok(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"{
        "location": "kerala",
        "location_type": "state",
        "density_threshold": 30,
        "stats": {
            "carbon_density": {"value": 61.9, "formatted": "61.90 Mg C/ha"},
            "carbon_stocks": {"value": 1.0, "formatted": "1 Mg C"},
            "tree_cover_area": {"value": 1.0, "formatted": "1 hectares"},
            "tree_cover_extent": {"2000": {"value": 1.0, "formatted": "1 hectares"}},
            "tree_cover_gain_2000_2020": {"value": 1.0, "formatted": "1 hectares"}
        },
        "yearly_data": {"emissions": {}, "tree_loss": {}},
        "analysis": {
            "forest_health_status": "Stable",
            "net_forest_change": {"value": 0.0, "formatted": "0 hectares", "percent": 0.0},
            "total_emissions": {"value": 0.0, "formatted": "0 Mg CO2e"},
            "total_loss": {"value": 0.0, "formatted": "0 hectares"}
        }
    }"#;

    #[test]
    fn analyze_request_carries_the_three_record_sections() {
        let record: ForestRecord = serde_json::from_str(RECORD_JSON).unwrap();
        let request = AnalyzeRequest {
            location: &record.location,
            stats: &record.stats,
            yearly_data: &record.yearly_data,
            analysis: &record.analysis,
        };
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["location"], "kerala");
        assert!(json.get("stats").is_some());
        assert!(json.get("yearly_data").is_some());
        assert!(json.get("analysis").is_some());
    }

    #[test]
    fn chat_request_nests_location_and_forest_data_in_context() {
        let record: ForestRecord = serde_json::from_str(RECORD_JSON).unwrap();
        let request = ChatRequest {
            message: "hello",
            context: ChatContext {
                location: &record.location,
                forest_data: &record,
            },
        };
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["message"], "hello");
        assert_eq!(json["context"]["location"], "kerala");
        assert_eq!(json["context"]["forestData"]["location_type"], "state");
    }

    #[test]
    fn chat_response_variants_both_decode() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"response": "hi"}"#).unwrap();
        assert_eq!(parsed.response, "hi");
        assert!(serde_json::from_str::<ChatResponse>("plain text").is_err());
    }
}
