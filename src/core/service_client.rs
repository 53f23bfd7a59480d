// src/core/service_client.rs
//! HTTP client for the resume analysis service

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::COOKIE;
use tracing::{debug, error, info, warn};

use crate::core::config_manager::ServiceConfig;
use crate::csrf::{cookie_value, CSRF_HEADER};
use crate::error::{CatalogError, SubmitError};
use crate::types::{
    AnalysisEnvelope, AnalysisRequest, AnalysisResult, JobCatalogResponse, JobDescriptor,
};

pub const JOBS_ENDPOINT: &str = "/api/jobs";
pub const RESUME_ENDPOINT: &str = "/api/resume";

/// The two calls the page makes against the analysis service
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<JobDescriptor>, CatalogError>;

    async fn submit_resume(&self, request: AnalysisRequest) -> Result<AnalysisResult, SubmitError>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
    csrf_token: Option<String>,
}

impl ServiceClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        let csrf_token = config
            .session_cookie
            .as_deref()
            .and_then(|cookies| cookie_value(cookies, &config.csrf_cookie_name));

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_cookie: config.session_cookie.clone(),
            csrf_token,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn with_session(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session_cookie {
            Some(cookie) => request.header(COOKIE, cookie),
            None => request,
        }
    }
}

#[async_trait]
impl AnalysisService for ServiceClient {
    async fn fetch_jobs(&self) -> Result<Vec<JobDescriptor>, CatalogError> {
        let url = self.url(JOBS_ENDPOINT);
        info!("Fetching job catalog: {}", url);

        let response = self
            .with_session(self.client.get(&url))
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        JobCatalogResponse::parse(&body)
    }

    async fn submit_resume(&self, request: AnalysisRequest) -> Result<AnalysisResult, SubmitError> {
        let url = self.url(RESUME_ENDPOINT);
        let file_name = request.resume.file_name.clone();
        let form = request
            .into_form()
            .map_err(|e| SubmitError::transport(format!("{:#}", e)))?;

        let mut builder = self.with_session(self.client.post(&url).multipart(form));
        match &self.csrf_token {
            Some(token) => builder = builder.header(CSRF_HEADER, token),
            None => warn!("No CSRF token in session cookie; the service may reject the upload"),
        }

        info!("Submitting {} for analysis: {}", file_name, url);

        let response = builder.send().await.map_err(|e| {
            error!("Analysis request failed: {}", e);
            SubmitError::transport(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read analysis response: {}", e);
            SubmitError::transport(e)
        })?;

        debug!("Analysis response ({}): {}", status, body);

        AnalysisEnvelope::parse(&body)?.into_result()
    }
}
