// src/utils.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::report::ExportedReport;

/// Slug used when no job title is selected
pub const FALLBACK_REPORT_SLUG: &str = "resume_analysis";

/// Normalize a job title for use in a file name: lower-cased, whitespace runs
/// collapsed to `_`, path separators replaced
pub fn report_slug(title: &str) -> String {
    let slug = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect::<String>();

    if slug.is_empty() {
        FALLBACK_REPORT_SLUG.to_string()
    } else {
        slug
    }
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Content type sent with the resume part
pub fn content_type_for(file_name: &str) -> &'static str {
    match get_file_extension(file_name).as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("doc") => "application/msword",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Ensure directory exists
pub async fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write file content with proper error context
pub async fn write_file_content(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent).await?;
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Write an exported report into `output_dir` under its own file name
pub async fn save_report(output_dir: &Path, report: &ExportedReport) -> Result<PathBuf> {
    let path = output_dir.join(&report.filename);
    write_file_content(&path, &report.bytes).await?;
    info!("Saved report {} ({} bytes)", path.display(), report.bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_slug() {
        assert_eq!(report_slug("Backend Engineer"), "backend_engineer");
        assert_eq!(report_slug("  Senior   Data\tEngineer "), "senior_data_engineer");
        assert_eq!(report_slug("DevOps/SRE Lead"), "devops-sre_lead");
        assert_eq!(report_slug("   "), FALLBACK_REPORT_SLUG);
    }

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("test.pdf"), Some("pdf".to_string()));
        assert_eq!(
            get_file_extension("document.DOCX"),
            Some("docx".to_string())
        );
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("resume.PDF"), "application/pdf");
        assert_eq!(
            content_type_for("resume.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content_type_for("resume"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_save_report_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let report = ExportedReport {
            filename: "backend_engineer_analyze.pdf".to_string(),
            bytes: b"%PDF".to_vec(),
        };

        let path = save_report(&dir.path().join("out"), &report).await.unwrap();
        assert_eq!(path, dir.path().join("out/backend_engineer_analyze.pdf"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF");
    }
}
