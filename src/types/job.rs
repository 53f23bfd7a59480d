// src/types/job.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptor {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(rename = "job_title", default)]
    pub title: String,
}

impl JobDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

// Job ids come out of the database as integers, but only their string form
// is ever sent back in the multipart form.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "job id must be a string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_string_ids() {
        let jobs: Vec<JobDescriptor> = serde_json::from_value(json!([
            {"id": 3, "job_title": "Backend Engineer"},
            {"id": "abc", "job_title": "Data Analyst"}
        ]))
        .unwrap();
        assert_eq!(jobs[0], JobDescriptor::new("3", "Backend Engineer"));
        assert_eq!(jobs[1], JobDescriptor::new("abc", "Data Analyst"));
    }

    #[test]
    fn test_rejects_object_id() {
        let parsed = serde_json::from_value::<JobDescriptor>(json!({"id": {}, "job_title": "x"}));
        assert!(parsed.is_err());
    }
}
