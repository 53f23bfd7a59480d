// src/render/console.rs
//! Terminal surface used by the CLI

use super::{PageControls, ResultSurface};
use crate::catalog::JobSelector;
use crate::view_model::{
    BadgeList, BadgeRegion, BreakdownRow, ExperienceView, ProjectList, ScoreBar,
};

const BAR_WIDTH: usize = 30;

#[derive(Debug, Default)]
pub struct ConsolePage {
    export_enabled: bool,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn export_enabled(&self) -> bool {
        self.export_enabled
    }
}

/// `[#########.....]` scaled to `BAR_WIDTH`
fn text_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn region_title(region: BadgeRegion) -> &'static str {
    match region {
        BadgeRegion::Skills => "Skills",
        BadgeRegion::MissingSkills => "Missing Skills",
        BadgeRegion::ProjectCategories => "Project Categories",
    }
}

impl ResultSurface for ConsolePage {
    fn show_match_score(&mut self, score: &ScoreBar) {
        println!("🎯 Match Score: {} {}", text_bar(score.percent), score.label());
    }

    fn show_experience(&mut self, experience: &ExperienceView) {
        println!("💼 Experience: {}", experience.label());
    }

    fn show_badges(&mut self, region: BadgeRegion, badges: &BadgeList) {
        match badges {
            BadgeList::Badges(items) => {
                let marker = if region == BadgeRegion::MissingSkills { "⚠️ " } else { "" };
                let rendered: Vec<String> = items.iter().map(|item| format!("{}[{}]", marker, item)).collect();
                println!("{}: {}", region_title(region), rendered.join(" "));
            }
            BadgeList::Placeholder(text) => println!("{}: {}", region_title(region), text),
        }
    }

    fn show_breakdown(&mut self, rows: &[BreakdownRow]) {
        println!("📊 Score Breakdown");
        for row in rows {
            println!("   {:<11} {} {:>4}%", row.label(), text_bar(row.percent), row.percent);
        }
    }

    fn show_projects(&mut self, projects: &ProjectList) {
        println!("📁 Project Descriptions");
        match projects {
            ProjectList::Blocks(blocks) => {
                for block in blocks {
                    println!("   {}", block.name);
                    println!("      {}", block.description);
                }
            }
            ProjectList::Placeholder(text) => println!("   {}", text),
        }
    }

    fn set_results_visible(&mut self, _visible: bool) {}

    fn set_export_enabled(&mut self, enabled: bool) {
        self.export_enabled = enabled;
    }

    fn scroll_to_results(&mut self) {
        println!();
    }
}

impl PageControls for ConsolePage {
    fn alert(&mut self, message: &str) {
        eprintln!("❌ {}", message);
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            println!("⏳ Analyzing resume...");
        }
    }

    fn set_submit_enabled(&mut self, _enabled: bool) {}

    fn show_job_selector(&mut self, selector: &JobSelector) {
        if !selector.is_enabled() {
            eprintln!("⚠️  {}", selector.placeholder());
        }
    }
}
