// src/core/mod.rs
//! Configuration and the service client

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ConfigManager, LoggingConfig, ReportConfig, ServiceConfig};
pub use service_client::{AnalysisService, ServiceClient};
