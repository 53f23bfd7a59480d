// src/lib.rs
//! Resume analysis client: job catalog, resume submission, result
//! rendering and PDF report export.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod csrf;
pub mod error;
pub mod render;
pub mod report;
pub mod state;
pub mod submission;
pub mod types;
pub mod utils;
pub mod view_model;

pub use app::AnalyzerApp;
pub use catalog::{JobCatalogLoader, JobSelector};
pub use error::{CatalogError, SubmitError};
pub use render::{ConsolePage, HtmlPage, PageControls, ResultRenderer, ResultSurface};
pub use report::{DocumentBuilder, ExportedReport, GenPdfBuilder, ReportExporter};
pub use state::AppState;
pub use submission::{AnalysisRequestSubmitter, LoadingGuard, ResumeForm};
pub use view_model::ResultViewModel;
