// src/types/resume.rs
use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use std::path::Path;

use crate::utils::content_type_for;

/// Multipart field carrying the resume bytes
pub const RESUME_FIELD: &str = "resume";
/// Multipart field carrying the selected job id
pub const JOB_FIELD: &str = "job_description";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a resume from disk, keeping only its file name for the upload
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read resume: {}", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Resume path has no file name: {}", path.display()))?;

        Ok(Self { file_name, bytes })
    }

    pub fn content_type(&self) -> &'static str {
        content_type_for(&self.file_name)
    }
}

/// A validated submission: one resume and one job id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub resume: ResumeFile,
    pub job_id: String,
}

impl AnalysisRequest {
    /// Build the two-part multipart body
    pub fn into_form(self) -> Result<Form> {
        let content_type = self.resume.content_type();
        let part = Part::bytes(self.resume.bytes)
            .file_name(self.resume.file_name)
            .mime_str(content_type)
            .context("Failed to create multipart")?;

        Ok(Form::new()
            .part(RESUME_FIELD, part)
            .text(JOB_FIELD, self.job_id))
    }
}
