// src/core/config_manager.rs
//! Configuration loading: optional config.yaml, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::csrf::DEFAULT_CSRF_COOKIE;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigManager {
    pub service: ServiceConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub csrf_cookie_name: String,
    /// Raw `Cookie` header of the host session (carries the CSRF token)
    pub session_cookie: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_seconds: 60,
            csrf_cookie_name: DEFAULT_CSRF_COOKIE.to_string(),
            session_cookie: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub font_dir: PathBuf,
    pub font_family: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            font_dir: PathBuf::from("/usr/share/fonts/truetype/liberation"),
            font_family: "LiberationSans".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("/tmp/resume-analyzer.log"),
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: ConfigManager,
    #[serde(default)]
    production: Option<ConfigManager>,
}

impl ConfigManager {
    /// Load configuration for the current environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let environment = Self::environment();

        let mut config = match path {
            Some(path) => Self::load_from_file(path, &environment)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(&default_path, &environment)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// `RESUME_ANALYZER_ENV`, then `ENVIRONMENT`, else `local`
    pub fn environment() -> String {
        std::env::var("RESUME_ANALYZER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        Ok(match environment {
            "production" => file.production.unwrap_or(file.local),
            _ => file.local,
        })
    }

    /// Apply `RESUME_ANALYZER_*` overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("RESUME_ANALYZER_URL") {
            self.service.base_url = url;
        }
        if let Some(cookie) = lookup("RESUME_ANALYZER_COOKIE") {
            self.service.session_cookie = Some(cookie);
        }
        if let Some(dir) = lookup("RESUME_ANALYZER_OUTPUT_DIR") {
            self.report.output_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("RESUME_ANALYZER_FONT_DIR") {
            self.report.font_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("RESUME_ANALYZER_LOG_FILE") {
            self.logging.file = PathBuf::from(file);
        }
    }
}
