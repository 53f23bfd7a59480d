// src/catalog.rs
//! Job catalog loading and the job selection control

use anyhow::Result;
use tracing::{error, info};

use crate::core::AnalysisService;
use crate::types::JobDescriptor;

pub const LOADING_PLACEHOLDER: &str = "Loading job descriptions...";
pub const SELECT_PLACEHOLDER: &str = "Select a job description";
pub const UNAVAILABLE_PLACEHOLDER: &str = "Unable to load job descriptions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorStatus {
    Loading,
    Ready,
    Unavailable,
}

/// State of the job `<select>`: a placeholder entry followed by the catalog
#[derive(Debug, Clone)]
pub struct JobSelector {
    status: SelectorStatus,
    options: Vec<JobOption>,
    selected: Option<String>,
}

impl Default for JobSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl JobSelector {
    pub fn new() -> Self {
        Self {
            status: SelectorStatus::Loading,
            options: Vec::new(),
            selected: None,
        }
    }

    pub fn status(&self) -> SelectorStatus {
        self.status
    }

    pub fn is_enabled(&self) -> bool {
        self.status == SelectorStatus::Ready
    }

    pub fn placeholder(&self) -> &'static str {
        match self.status {
            SelectorStatus::Loading => LOADING_PLACEHOLDER,
            SelectorStatus::Ready => SELECT_PLACEHOLDER,
            SelectorStatus::Unavailable => UNAVAILABLE_PLACEHOLDER,
        }
    }

    pub fn options(&self) -> &[JobOption] {
        &self.options
    }

    /// Append one option per job, in server order, and enable the control
    pub fn populate(&mut self, jobs: &[JobDescriptor]) {
        self.options.extend(jobs.iter().map(|job| JobOption {
            value: job.id.clone(),
            label: job.title.clone(),
        }));
        self.status = SelectorStatus::Ready;
    }

    /// Leave only a disabled placeholder behind
    pub fn degrade(&mut self) {
        self.options.clear();
        self.selected = None;
        self.status = SelectorStatus::Unavailable;
    }

    pub fn select(&mut self, value: &str) -> Result<()> {
        if !self.is_enabled() {
            anyhow::bail!("Job selection is unavailable: {}", self.placeholder());
        }
        if !self.options.iter().any(|option| option.value == value) {
            anyhow::bail!("Unknown job description: {}", value);
        }
        self.selected = Some(value.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_title(&self) -> Option<&str> {
        let selected = self.selected.as_deref()?;
        self.options
            .iter()
            .find(|option| option.value == selected)
            .map(|option| option.label.as_str())
    }
}

pub struct JobCatalogLoader;

impl JobCatalogLoader {
    /// Fill `selector` from the service. Failures degrade the control and are
    /// logged, never propagated.
    pub async fn load<S>(service: &S, selector: &mut JobSelector) -> bool
    where
        S: AnalysisService + ?Sized,
    {
        match service.fetch_jobs().await {
            Ok(jobs) => {
                info!("Loaded {} job descriptions", jobs.len());
                selector.populate(&jobs);
                true
            }
            Err(e) => {
                error!("Error fetching jobs: {}", e);
                selector.degrade();
                false
            }
        }
    }
}
