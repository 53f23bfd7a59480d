// src/app.rs
//! Page controller: owns the state, the form and the service

use anyhow::Result;
use tracing::info;

use crate::catalog::JobCatalogLoader;
use crate::core::AnalysisService;
use crate::error::SubmitError;
use crate::render::{PageControls, ResultSurface};
use crate::report::{DocumentBuilder, ExportedReport, ReportExporter};
use crate::state::AppState;
use crate::submission::{AnalysisRequestSubmitter, ResumeForm};
use crate::types::ResumeFile;

pub struct AnalyzerApp<S: AnalysisService> {
    service: S,
    state: AppState,
    form: ResumeForm,
}

impl<S: AnalysisService> AnalyzerApp<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: AppState::new(),
            form: ResumeForm::new(),
        }
    }

    /// Startup: export disabled, results hidden, catalog loaded once
    pub async fn initialize<P>(&mut self, page: &mut P) -> bool
    where
        P: PageControls + ResultSurface,
    {
        page.set_export_enabled(false);
        page.set_results_visible(false);
        page.show_job_selector(&self.form.jobs);

        let loaded = JobCatalogLoader::load(&self.service, &mut self.form.jobs).await;
        page.show_job_selector(&self.form.jobs);
        loaded
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn form(&self) -> &ResumeForm {
        &self.form
    }

    pub fn select_job(&mut self, job_id: &str) -> Result<()> {
        self.form.jobs.select(job_id)?;
        info!(
            "Selected job description: {}",
            self.form.jobs.selected_title().unwrap_or(job_id)
        );
        Ok(())
    }

    pub fn select_resume(&mut self, resume: ResumeFile) {
        self.form.select_resume(resume);
    }

    pub async fn submit<P>(&mut self, page: &mut P) -> Result<(), SubmitError>
    where
        P: PageControls + ResultSurface,
    {
        AnalysisRequestSubmitter::new(&self.service)
            .submit(&self.form, &mut self.state, page)
            .await
    }

    /// Export the cached analysis for the currently selected job
    pub fn export_report<B, F>(&self, make_builder: F) -> Result<Option<ExportedReport>>
    where
        B: DocumentBuilder,
        F: FnOnce() -> Result<B>,
    {
        ReportExporter::export(&self.state, self.form.jobs.selected_title(), make_builder)
    }
}
