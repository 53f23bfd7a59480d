// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::AnalyzerApp;
use crate::core::{AnalysisService, ConfigManager, ServiceClient};
use crate::render::{ConsolePage, HtmlPage, ResultRenderer};
use crate::report::GenPdfBuilder;
use crate::state::AppState;
use crate::types::ResumeFile;
use crate::utils::{save_report, write_file_content};

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Match a resume against a job description and export the analysis")]
pub struct AnalyzerCli {
    #[command(subcommand)]
    pub command: AnalyzerCommand,

    /// YAML configuration file (defaults to ./config.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the analysis service base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum AnalyzerCommand {
    /// List available job descriptions
    Jobs,
    /// Analyze a resume against a job description
    Analyze {
        /// Resume file to upload
        #[arg(long)]
        resume: PathBuf,
        /// Job description id (see `jobs`)
        #[arg(long)]
        job: String,
        /// Export the PDF report into the output directory
        #[arg(long)]
        pdf: bool,
        /// Also write the rendered results page to this path
        #[arg(long)]
        html: Option<PathBuf>,
    },
}

pub async fn handle_command(cli: AnalyzerCli, mut config: ConfigManager) -> Result<()> {
    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
    }

    let client = ServiceClient::new(&config.service)?;
    let mut app = AnalyzerApp::new(client);
    let mut page = ConsolePage::new();

    match cli.command {
        AnalyzerCommand::Jobs => {
            if !app.initialize(&mut page).await {
                anyhow::bail!("Job descriptions could not be loaded");
            }
            for option in app.form().jobs.options() {
                println!("{:>6}  {}", option.value, option.label);
            }
        }

        AnalyzerCommand::Analyze {
            resume,
            job,
            pdf,
            html,
        } => {
            app.initialize(&mut page).await;
            app.select_job(&job)?;
            app.select_resume(ResumeFile::from_path(&resume).await?);
            println!("📄 {}", app.form().drop_label());

            // Already alerted on the console; the exit status carries the failure.
            app.submit(&mut page)
                .await
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;

            if let Some(path) = html {
                write_results_page(&app, &path).await?;
            }

            if pdf {
                if page.export_enabled() {
                    export_pdf(&app, &config).await?;
                } else {
                    println!("Nothing to export yet");
                }
            }
        }
    }

    Ok(())
}

async fn write_results_page<S: AnalysisService>(app: &AnalyzerApp<S>, path: &Path) -> Result<()> {
    let result = app
        .state()
        .last_analysis()
        .cloned()
        .context("No analysis to render")?;

    let mut html_page = HtmlPage::new();
    let mut state = AppState::new();
    ResultRenderer::display(result, &mut state, &mut html_page);

    write_file_content(path, html_page.document().as_bytes()).await?;
    info!("Wrote results page: {}", path.display());
    println!("🌐 Results page: {}", path.display());
    Ok(())
}

async fn export_pdf<S: AnalysisService>(app: &AnalyzerApp<S>, config: &ConfigManager) -> Result<()> {
    match app.export_report(|| GenPdfBuilder::from_config(&config.report))? {
        Some(report) => {
            let path = save_report(&config.report.output_dir, &report).await?;
            println!("✓ Report saved to {}", path.display());
        }
        None => println!("Nothing to export yet"),
    }
    Ok(())
}
