// src/submission.rs
//! Resume form model and the submission flow

use std::ops::{Deref, DerefMut};
use tracing::{error, info, warn};

use crate::catalog::JobSelector;
use crate::core::AnalysisService;
use crate::error::SubmitError;
use crate::render::{PageControls, ResultRenderer, ResultSurface};
use crate::state::AppState;
use crate::types::{AnalysisRequest, ResumeFile};

pub const DEFAULT_DROP_LABEL: &str = "Drag and drop your resume or click to browse";

/// What the user has picked on the form
#[derive(Debug, Default)]
pub struct ResumeForm {
    resume: Option<ResumeFile>,
    pub jobs: JobSelector,
}

impl ResumeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_resume(&mut self, resume: ResumeFile) {
        info!("Selected resume: {}", resume.file_name);
        self.resume = Some(resume);
    }

    pub fn resume(&self) -> Option<&ResumeFile> {
        self.resume.as_ref()
    }

    /// Text of the file drop area
    pub fn drop_label(&self) -> String {
        match &self.resume {
            Some(resume) => format!("Selected: {}", resume.file_name),
            None => DEFAULT_DROP_LABEL.to_string(),
        }
    }

    /// Preconditions checked before anything goes on the wire
    pub fn validate(&self) -> Result<AnalysisRequest, SubmitError> {
        let resume = self.resume.clone().ok_or(SubmitError::MissingFile)?;
        let job_id = self
            .jobs
            .selected_value()
            .filter(|id| !id.is_empty())
            .ok_or(SubmitError::MissingJob)?
            .to_string();

        Ok(AnalysisRequest { resume, job_id })
    }
}

/// Shows the loading overlay and locks the submit control for its lifetime
pub struct LoadingGuard<'a, P: PageControls + ?Sized> {
    page: &'a mut P,
    state: &'a mut AppState,
}

impl<'a, P: PageControls + ?Sized> LoadingGuard<'a, P> {
    pub fn engage(page: &'a mut P, state: &'a mut AppState) -> Self {
        state.set_submission_in_flight(true);
        page.set_submit_enabled(false);
        page.set_loading(true);
        Self { page, state }
    }
}

impl<P: PageControls + ?Sized> Deref for LoadingGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.page
    }
}

impl<P: PageControls + ?Sized> DerefMut for LoadingGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.page
    }
}

impl<P: PageControls + ?Sized> Drop for LoadingGuard<'_, P> {
    fn drop(&mut self) {
        self.page.set_loading(false);
        self.page.set_submit_enabled(true);
        self.state.set_submission_in_flight(false);
    }
}

pub struct AnalysisRequestSubmitter<'a, S: AnalysisService + ?Sized> {
    service: &'a S,
}

impl<'a, S: AnalysisService + ?Sized> AnalysisRequestSubmitter<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Run one submission: reset, validate, send, then render or report.
    /// Every failure is alerted on the page before being returned.
    pub async fn submit<P>(
        &self,
        form: &ResumeForm,
        state: &mut AppState,
        page: &mut P,
    ) -> Result<(), SubmitError>
    where
        P: PageControls + ResultSurface,
    {
        if state.submission_in_flight() {
            warn!("Ignoring submission while another one is outstanding");
            return Err(SubmitError::Busy);
        }

        ResultRenderer::reset(state, page);

        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                warn!("Submission rejected: {}", e);
                page.alert(&e.to_string());
                return Err(e);
            }
        };

        let outcome = {
            let _loading = LoadingGuard::engage(page, state);
            self.service.submit_resume(request).await
        };

        match outcome {
            Ok(result) => {
                info!("Analysis completed with match score {}%", result.match_score);
                ResultRenderer::display(result, state, page);
                Ok(())
            }
            Err(e) => {
                match &e {
                    SubmitError::Transport { detail } => error!("Error: {}", detail),
                    other => error!("Error: {}", other),
                }
                page.alert(&e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HtmlPage;
    use crate::types::JobDescriptor;

    #[test]
    fn test_drop_label() {
        let mut form = ResumeForm::new();
        assert_eq!(form.drop_label(), DEFAULT_DROP_LABEL);
        form.select_resume(ResumeFile::new("jane.pdf", vec![]));
        assert_eq!(form.drop_label(), "Selected: jane.pdf");
    }

    #[test]
    fn test_validate_requires_file_then_job() {
        let mut form = ResumeForm::new();
        form.jobs.populate(&[JobDescriptor::new("1", "Backend Engineer")]);
        form.jobs.select("1").unwrap();
        assert!(matches!(form.validate(), Err(SubmitError::MissingFile)));

        form.select_resume(ResumeFile::new("jane.pdf", vec![1]));
        form.jobs.clear_selection();
        assert!(matches!(form.validate(), Err(SubmitError::MissingJob)));

        form.jobs.select("1").unwrap();
        let request = form.validate().unwrap();
        assert_eq!(request.job_id, "1");
        assert_eq!(request.resume.file_name, "jane.pdf");
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let mut page = HtmlPage::new();
        let mut state = AppState::new();
        {
            let mut guard = LoadingGuard::engage(&mut page, &mut state);
            assert!(guard.is_loading());
            assert!(!guard.submit_enabled());
            guard.alert("still usable through the guard");
        }
        assert!(!page.is_loading());
        assert!(page.submit_enabled());
        assert!(!state.submission_in_flight());
        assert_eq!(page.alerts().len(), 1);
    }
}
