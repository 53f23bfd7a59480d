// src/types/analysis.rs
//! Analysis result structures as returned by the resume analysis service

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ===== Analysis Result =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "rank", default, deserialize_with = "percent")]
    pub match_score: u8,
    #[serde(
        rename = "total_experience",
        default,
        deserialize_with = "optional_years"
    )]
    pub total_experience_years: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(rename = "missing_skills", default, deserialize_with = "null_as_default")]
    pub missing_skills: Vec<String>,
    #[serde(
        rename = "project_category",
        default,
        deserialize_with = "null_as_default"
    )]
    pub project_categories: Vec<String>,
    #[serde(
        rename = "project_description",
        default,
        deserialize_with = "null_as_default"
    )]
    pub project_descriptions: BTreeMap<String, String>,
    #[serde(rename = "score_breakdown", default)]
    pub score_breakdown: Option<ScoreBreakdown>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default, deserialize_with = "optional_percent")]
    pub skills: Option<u8>,
    #[serde(default, deserialize_with = "optional_percent")]
    pub experience: Option<u8>,
    #[serde(default, deserialize_with = "optional_percent")]
    pub projects: Option<u8>,
    #[serde(default, deserialize_with = "optional_percent")]
    pub keywords: Option<u8>,
}

impl ScoreBreakdown {
    /// Score for one category, 0 when the service left it out
    pub fn score(&self, category: BreakdownCategory) -> u8 {
        let value = match category {
            BreakdownCategory::Skills => self.skills,
            BreakdownCategory::Experience => self.experience,
            BreakdownCategory::Projects => self.projects,
            BreakdownCategory::Keywords => self.keywords,
        };
        value.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakdownCategory {
    Skills,
    Experience,
    Projects,
    Keywords,
}

impl BreakdownCategory {
    /// Fixed display order
    pub const ALL: [BreakdownCategory; 4] = [
        BreakdownCategory::Skills,
        BreakdownCategory::Experience,
        BreakdownCategory::Projects,
        BreakdownCategory::Keywords,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BreakdownCategory::Skills => "skills",
            BreakdownCategory::Experience => "experience",
            BreakdownCategory::Projects => "projects",
            BreakdownCategory::Keywords => "keywords",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BreakdownCategory::Skills => "Skills",
            BreakdownCategory::Experience => "Experience",
            BreakdownCategory::Projects => "Projects",
            BreakdownCategory::Keywords => "Keywords",
        }
    }
}

// ===== Lenient field readers =====
// Scores are produced by a language model upstream, so numbers arrive as
// ints, floats, numeric strings or null.

pub(crate) fn clamp_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .map(clamp_percent)
        .unwrap_or(0))
}

fn optional_percent<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .map(clamp_percent))
}

fn optional_years<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|years| years.is_finite())
        .map(|years| years.max(0.0)))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
