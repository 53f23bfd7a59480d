// src/types/response.rs
//! Response envelopes of the analysis service

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{CatalogError, SubmitError};
use crate::types::{AnalysisResult, JobDescriptor};

// ===== Job Catalog =====

#[derive(Debug, Deserialize)]
pub struct JobCatalogResponse {
    #[serde(default)]
    pub data: Option<Vec<JobDescriptor>>,
}

impl JobCatalogResponse {
    pub fn parse(body: &str) -> Result<Vec<JobDescriptor>, CatalogError> {
        let response: JobCatalogResponse =
            serde_json::from_str(body).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        response
            .data
            .ok_or_else(|| CatalogError::Malformed("missing `data` array".to_string()))
    }
}

// ===== Analysis =====

/// `{status, data?, message?}` as sent by `/api/resume`
#[derive(Debug, Deserialize)]
pub struct AnalysisEnvelope {
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl AnalysisEnvelope {
    pub fn parse(body: &str) -> Result<Self, SubmitError> {
        serde_json::from_str(body).map_err(|e| {
            warn!("Analysis response is not a JSON envelope: {}", e);
            SubmitError::rejected(None)
        })
    }

    /// Interpret the envelope; only `status: true` with a data object counts as success
    pub fn into_result(self) -> Result<AnalysisResult, SubmitError> {
        let message = message_of(self.message.as_ref());

        if self.status != Value::Bool(true) {
            return Err(SubmitError::rejected(message));
        }

        let data = match self.data {
            Some(Value::Object(map)) => unwrap_service_envelope(map)?,
            _ => return Err(SubmitError::rejected(message)),
        };

        serde_json::from_value(Value::Object(data)).map_err(|e| {
            warn!("Analysis data does not match the expected shape: {}", e);
            SubmitError::rejected(message)
        })
    }
}

fn message_of(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

// The upstream view wraps the analyzer's own `{status, data}` result inside
// `data`, so the payload may be nested one level deeper than advertised.
fn unwrap_service_envelope(mut data: Map<String, Value>) -> Result<Map<String, Value>, SubmitError> {
    if data.contains_key("rank") || !data.contains_key("status") {
        return Ok(data);
    }

    let message = message_of(data.get("message"));
    if data.get("status") != Some(&Value::Bool(true)) {
        return Err(SubmitError::rejected(message));
    }

    match data.remove("data") {
        Some(Value::Object(inner)) => Ok(inner),
        _ => Err(SubmitError::rejected(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_REJECTION;

    fn interpret(body: &str) -> Result<AnalysisResult, SubmitError> {
        AnalysisEnvelope::parse(body)?.into_result()
    }

    #[test]
    fn test_success_envelope() {
        let result = interpret(r#"{"status": true, "data": {"rank": 64, "skills": ["Rust"]}}"#).unwrap();
        assert_eq!(result.match_score, 64);
        assert_eq!(result.skills, vec!["Rust"]);
    }

    #[test]
    fn test_nested_service_envelope() {
        let body = r#"{"status": true, "data": {"status": true, "data": {"rank": 55}}}"#;
        assert_eq!(interpret(body).unwrap().match_score, 55);
    }

    #[test]
    fn test_nested_failure_uses_inner_message() {
        let body = r#"{"status": true, "data": {"status": false, "message": "Could not extract text from PDF"}}"#;
        let err = interpret(body).unwrap_err();
        assert_eq!(err.to_string(), "Could not extract text from PDF");
    }

    #[test]
    fn test_status_false_with_message() {
        let err = interpret(r#"{"status": false, "message": "Unsupported file"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file");
    }

    #[test]
    fn test_status_false_without_message() {
        let err = interpret(r#"{"status": false}"#).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_REJECTION);
    }

    #[test]
    fn test_status_true_without_data() {
        let err = interpret(r#"{"status": true, "message": "  "}"#).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_REJECTION);
    }

    #[test]
    fn test_non_json_body() {
        let err = interpret("<html>Server Error</html>").unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { message: None }));
    }

    #[test]
    fn test_truthy_status_is_not_success() {
        let err = interpret(r#"{"status": "ok", "data": {"rank": 1}}"#).unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { .. }));
    }

    #[test]
    fn test_catalog_parse() {
        let jobs = JobCatalogResponse::parse(
            r#"{"data": [{"id": 1, "job_title": "Backend Engineer"}, {"id": 2, "job_title": "SRE"}]}"#,
        )
        .unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].title, "SRE");
    }

    #[test]
    fn test_catalog_without_data_is_malformed() {
        assert!(matches!(
            JobCatalogResponse::parse(r#"{"jobs": []}"#),
            Err(CatalogError::Malformed(_))
        ));
        assert!(JobCatalogResponse::parse("not json").is_err());
    }
}
