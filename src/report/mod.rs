// src/report/mod.rs
//! PDF report export of the cached analysis

pub mod fonts;
pub mod pdf;

pub use pdf::GenPdfBuilder;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::state::AppState;
use crate::types::AnalysisResult;
use crate::utils::report_slug;
use crate::view_model::{BadgeList, ProjectList, ResultViewModel};

pub const REPORT_TITLE: &str = "Resume Analysis Report";
pub const ATTRIBUTION: &str = "Generated by Resume Analyzer";
pub const NO_ENTRIES: &str = "None";
pub const NO_BREAKDOWN: &str = "No score breakdown available";

/// Vertical room a project block needs before it is moved to a new page
pub const PROJECT_MIN_HEIGHT_MM: f64 = 30.0;

/// Library-agnostic cursor over a paginated document
pub trait DocumentBuilder {
    fn add_title(&mut self, text: &str);
    fn add_heading(&mut self, text: &str);
    fn add_subheading(&mut self, text: &str);
    fn add_paragraph(&mut self, text: &str);
    fn add_bullet(&mut self, text: &str);
    /// Label, right-aligned percentage and a bar proportional to `percent`
    fn add_bar(&mut self, label: &str, percent: u8);
    fn add_footer(&mut self, lines: &[String]);
    fn new_page(&mut self);
    fn new_page_if_needed(&mut self, min_height_mm: f64);
    fn finish(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// `<job-title-slug>_analyze.pdf`
pub fn report_filename(job_title: Option<&str>) -> String {
    format!("{}_analyze.pdf", report_slug(job_title.unwrap_or_default()))
}

pub struct ReportExporter;

impl ReportExporter {
    /// Export the cached analysis. Returns `None` without building anything
    /// when there is nothing to export.
    pub fn export<B, F>(
        state: &AppState,
        job_title: Option<&str>,
        make_builder: F,
    ) -> Result<Option<ExportedReport>>
    where
        B: DocumentBuilder,
        F: FnOnce() -> Result<B>,
    {
        Self::export_at(state, job_title, make_builder, Local::now())
    }

    pub fn export_at<B, F>(
        state: &AppState,
        job_title: Option<&str>,
        make_builder: F,
        generated_at: DateTime<Local>,
    ) -> Result<Option<ExportedReport>>
    where
        B: DocumentBuilder,
        F: FnOnce() -> Result<B>,
    {
        let Some(result) = state.exportable() else {
            debug!("Export requested without an exportable analysis");
            return Ok(None);
        };

        let mut builder = make_builder()?;
        Self::compose(result, job_title, generated_at, &mut builder);
        let bytes = builder
            .finish()
            .context("Failed to render analysis report")?;

        let filename = report_filename(job_title);
        info!("Exported {} ({} bytes)", filename, bytes.len());
        Ok(Some(ExportedReport { filename, bytes }))
    }

    /// Lay out every report section in order
    pub fn compose<B>(
        result: &AnalysisResult,
        job_title: Option<&str>,
        generated_at: DateTime<Local>,
        doc: &mut B,
    ) where
        B: DocumentBuilder + ?Sized,
    {
        let view = ResultViewModel::from_result(result);

        doc.add_title(REPORT_TITLE);
        doc.add_paragraph(&format!(
            "Job Description: {}",
            job_title.filter(|t| !t.trim().is_empty()).unwrap_or("Not selected")
        ));

        doc.add_heading(&format!("Match Score: {}", view.match_score.label()));
        doc.add_heading(&format!("Experience: {}", view.experience.label()));

        doc.add_heading("Skills:");
        match &view.skills {
            BadgeList::Badges(skills) => doc.add_paragraph(&skills.join(", ")),
            BadgeList::Placeholder(_) => doc.add_paragraph(NO_ENTRIES),
        }

        doc.add_heading("Missing Skills:");
        match &view.missing_skills {
            BadgeList::Badges(skills) => skills.iter().for_each(|skill| doc.add_bullet(skill)),
            BadgeList::Placeholder(_) => doc.add_paragraph(NO_ENTRIES),
        }

        if view.has_breakdown {
            doc.new_page();
            doc.add_heading("Score Breakdown:");
            for row in &view.breakdown {
                doc.add_bar(row.label(), row.percent);
            }
        } else {
            doc.add_heading("Score Breakdown:");
            doc.add_paragraph(NO_BREAKDOWN);
        }

        doc.add_heading("Project Categories:");
        match &view.project_categories {
            BadgeList::Badges(categories) => doc.add_paragraph(&categories.join(", ")),
            BadgeList::Placeholder(_) => doc.add_paragraph(NO_ENTRIES),
        }

        doc.add_heading("Project Descriptions:");
        match &view.projects {
            ProjectList::Blocks(blocks) => {
                for block in blocks {
                    doc.new_page_if_needed(PROJECT_MIN_HEIGHT_MM);
                    doc.add_subheading(&block.name);
                    doc.add_paragraph(&block.description);
                }
            }
            ProjectList::Placeholder(_) => doc.add_paragraph(NO_ENTRIES),
        }

        doc.add_footer(&[
            ATTRIBUTION.to_string(),
            generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }
}
