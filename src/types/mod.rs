// src/types/mod.rs
pub mod analysis;
pub mod job;
pub mod response;
pub mod resume;

pub use analysis::{AnalysisResult, BreakdownCategory, ScoreBreakdown};
pub use job::JobDescriptor;
pub use response::{AnalysisEnvelope, JobCatalogResponse};
pub use resume::{AnalysisRequest, ResumeFile};
