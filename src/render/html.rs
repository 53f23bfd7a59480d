// src/render/html.rs
//! HTML rendering of the results page, region by region

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::{PageControls, ResultSurface};
use crate::catalog::JobSelector;
use crate::view_model::{
    BadgeList, BadgeRegion, BreakdownRow, ExperienceLevel, ExperienceView, ProjectList, ScoreBar,
};

pub const MATCH_SCORE_REGION: &str = "matchScore";
pub const EXPERIENCE_REGION: &str = "experience";
pub const BREAKDOWN_REGION: &str = "scoreBreakdown";
pub const PROJECTS_REGION: &str = "projectDescriptions";

/// In-memory page: each region holds the inner HTML of its container
#[derive(Debug)]
pub struct HtmlPage {
    regions: BTreeMap<&'static str, String>,
    job_options: String,
    job_select_enabled: bool,
    results_visible: bool,
    export_enabled: bool,
    loading: bool,
    submit_enabled: bool,
    alerts: Vec<String>,
    scroll_requests: usize,
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlPage {
    pub fn new() -> Self {
        let mut page = Self {
            regions: BTreeMap::new(),
            job_options: String::new(),
            job_select_enabled: false,
            results_visible: false,
            export_enabled: false,
            loading: false,
            submit_enabled: true,
            alerts: Vec::new(),
            scroll_requests: 0,
        };
        page.show_job_selector(&JobSelector::new());
        page
    }

    pub fn region(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn export_enabled(&self) -> bool {
        self.export_enabled
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// Full results document
    pub fn document(&self) -> String {
        let region = |id: &str| self.region(id).unwrap_or_default().to_string();
        let hidden = |visible: bool| if visible { "" } else { " hidden" };
        let disabled = |enabled: bool| if enabled { "" } else { " disabled" };

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Resume Analysis</title></head>\n<body>\n");
        let _ = writeln!(
            html,
            "<form id=\"resumeForm\"><select id=\"jobDescription\"{}>{}</select><button id=\"analyzeBtn\" type=\"submit\"{}>Analyze</button></form>",
            disabled(self.job_select_enabled),
            self.job_options,
            disabled(self.submit_enabled),
        );
        let _ = writeln!(
            html,
            "<div id=\"loadingOverlay\" class=\"loading-overlay{}\"></div>",
            hidden(self.loading)
        );
        let _ = writeln!(
            html,
            "<button id=\"downloadPDF\" type=\"button\"{}>Download PDF</button>",
            disabled(self.export_enabled)
        );
        let _ = writeln!(html, "<section id=\"results\" class=\"results{}\">", hidden(self.results_visible));
        let _ = writeln!(
            html,
            "<div id=\"{}\" class=\"score-track\">{}</div>",
            MATCH_SCORE_REGION,
            region(MATCH_SCORE_REGION)
        );
        let _ = writeln!(
            html,
            "<div id=\"{}\">{}</div>",
            EXPERIENCE_REGION,
            region(EXPERIENCE_REGION)
        );
        for badge_region in [
            BadgeRegion::Skills,
            BadgeRegion::ProjectCategories,
            BadgeRegion::MissingSkills,
        ] {
            let id = badge_region.element_id();
            let _ = writeln!(html, "<div id=\"{}\" class=\"badges\">{}</div>", id, region(id));
        }
        let _ = writeln!(
            html,
            "<div id=\"{}\"><h3>Score Breakdown</h3>{}</div>",
            BREAKDOWN_REGION,
            region(BREAKDOWN_REGION)
        );
        let _ = writeln!(
            html,
            "<div id=\"{}\">{}</div>",
            PROJECTS_REGION,
            region(PROJECTS_REGION)
        );
        html.push_str("</section>\n</body>\n</html>\n");
        html
    }
}

fn placeholder(text: &str) -> String {
    format!("<p class=\"placeholder\">{}</p>", escape_html(text))
}

fn badge(region: BadgeRegion, text: &str) -> String {
    match region {
        BadgeRegion::Skills => format!("<div class=\"badge badge-skill\">{}</div>", escape_html(text)),
        BadgeRegion::ProjectCategories => {
            format!("<div class=\"badge badge-category\">{}</div>", escape_html(text))
        }
        BadgeRegion::MissingSkills => format!(
            "<div class=\"badge badge-missing\"><i class=\"fas fa-exclamation-circle\"></i>{}</div>",
            escape_html(text)
        ),
    }
}

impl ResultSurface for HtmlPage {
    fn show_match_score(&mut self, score: &ScoreBar) {
        let fragment = format!(
            "<div id=\"scoreValue\" class=\"score-bar {}\" style=\"width: {}%; background-color: {}\"><span class=\"score-label\">{}</span></div>",
            score.tone.css_class(),
            score.percent,
            score.tone.color(),
            score.label()
        );
        self.regions.insert(MATCH_SCORE_REGION, fragment);
    }

    fn show_experience(&mut self, experience: &ExperienceView) {
        let fragment = format!(
            "<span class=\"experience-level {}\">{}</span>",
            match experience.level {
                ExperienceLevel::Fresher => "experience-fresher",
                ExperienceLevel::Experienced => "experience-experienced",
            },
            escape_html(&experience.label())
        );
        self.regions.insert(EXPERIENCE_REGION, fragment);
    }

    fn show_badges(&mut self, region: BadgeRegion, badges: &BadgeList) {
        let fragment = match badges {
            BadgeList::Badges(items) => items.iter().map(|item| badge(region, item)).collect(),
            BadgeList::Placeholder(text) => placeholder(text),
        };
        self.regions.insert(region.element_id(), fragment);
    }

    fn show_breakdown(&mut self, rows: &[BreakdownRow]) {
        let mut fragment = String::new();
        for row in rows {
            let key = row.category.key();
            let _ = write!(
                fragment,
                "<div class=\"breakdown-row\" data-category=\"{key}\"><span class=\"breakdown-label\">{label}</span><span id=\"{key}Score\">{percent}%</span><div class=\"breakdown-track\"><div id=\"{key}ScoreBar\" class=\"breakdown-bar\" style=\"width: {percent}%\"></div></div></div>",
                key = key,
                label = row.label(),
                percent = row.percent,
            );
        }
        self.regions.insert(BREAKDOWN_REGION, fragment);
    }

    fn show_projects(&mut self, projects: &ProjectList) {
        let fragment = match projects {
            ProjectList::Blocks(blocks) => blocks
                .iter()
                .map(|block| {
                    format!(
                        "<div class=\"project\"><h4>{}</h4><p>{}</p></div>",
                        escape_html(&block.name),
                        escape_html(&block.description)
                    )
                })
                .collect(),
            ProjectList::Placeholder(text) => placeholder(text),
        };
        self.regions.insert(PROJECTS_REGION, fragment);
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
    }

    fn set_export_enabled(&mut self, enabled: bool) {
        self.export_enabled = enabled;
    }

    fn scroll_to_results(&mut self) {
        self.scroll_requests += 1;
    }
}

impl PageControls for HtmlPage {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn show_job_selector(&mut self, selector: &JobSelector) {
        let mut options = format!(
            "<option value=\"\" disabled selected>{}</option>",
            escape_html(selector.placeholder())
        );
        for option in selector.options() {
            let _ = write!(
                options,
                "<option value=\"{}\">{}</option>",
                escape_html(&option.value),
                escape_html(&option.label)
            );
        }
        self.job_options = options;
        self.job_select_enabled = selector.is_enabled();
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ResultRenderer;
    use crate::state::AppState;
    use crate::types::AnalysisResult;
    use scraper::{Html, Selector};
    use serde_json::json;

    fn render(value: serde_json::Value) -> (HtmlPage, Html) {
        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        let mut page = HtmlPage::new();
        let mut state = AppState::new();
        ResultRenderer::display(result, &mut state, &mut page);
        let document = Html::parse_document(&page.document());
        (page, document)
    }

    fn select<'a>(document: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).collect()
    }

    fn text(element: &scraper::ElementRef<'_>) -> String {
        element.text().collect::<String>()
    }

    #[test]
    fn test_score_reads_back_for_all_values() {
        for rank in [0u8, 1, 49, 50, 51, 99, 100] {
            let (_, document) = render(json!({ "rank": rank }));
            let bar = select(&document, "#scoreValue")[0];
            assert_eq!(text(&bar), format!("{}%", rank));

            let style = bar.value().attr("style").unwrap();
            assert!(style.contains(&format!("width: {}%", rank)));

            let class = bar.value().attr("class").unwrap();
            assert_eq!(class.contains("score-high"), rank >= 50, "rank {}", rank);
            assert_eq!(class.contains("score-low"), rank < 50, "rank {}", rank);
        }
    }

    #[test]
    fn test_empty_lists_render_single_placeholder() {
        let (_, document) = render(json!({"rank": 40}));
        for id in ["skills", "missingSkills", "categories", "projectDescriptions"] {
            assert_eq!(select(&document, &format!("#{} .placeholder", id)).len(), 1, "{}", id);
            assert!(select(&document, &format!("#{} .badge", id)).is_empty(), "{}", id);
        }
        assert!(select(&document, "#projectDescriptions .project").is_empty());
    }

    #[test]
    fn test_breakdown_missing_key_is_zero() {
        let (_, document) = render(json!({
            "score_breakdown": {"skills": 80, "experience": 40, "projects": 60}
        }));
        assert_eq!(text(&select(&document, "#keywordsScore")[0]), "0%");
        assert_eq!(text(&select(&document, "#skillsScore")[0]), "80%");
        assert_eq!(text(&select(&document, "#experienceScore")[0]), "40%");
        assert_eq!(text(&select(&document, "#projectsScore")[0]), "60%");

        let order: Vec<&str> = select(&document, ".breakdown-row")
            .iter()
            .filter_map(|row| row.value().attr("data-category"))
            .collect();
        assert_eq!(order, vec!["skills", "experience", "projects", "keywords"]);
    }

    #[test]
    fn test_text_is_escaped() {
        let (_, document) = render(json!({
            "skills": ["<script>alert(1)</script>"],
            "project_description": {"A & B": "<b>bold</b>"}
        }));
        assert!(select(&document, "script").is_empty());
        assert_eq!(text(&select(&document, "#skills .badge")[0]), "<script>alert(1)</script>");
        assert_eq!(text(&select(&document, ".project h4")[0]), "A & B");
    }

    #[test]
    fn test_display_reveals_results_and_enables_export() {
        let (page, document) = render(json!({"rank": 10}));
        assert!(page.results_visible());
        assert!(page.export_enabled());
        assert_eq!(page.scroll_requests(), 1);
        assert!(select(&document, "#results.hidden").is_empty());
        assert!(select(&document, "#downloadPDF[disabled]").is_empty());
    }

    #[test]
    fn test_fresh_page_is_hidden_and_disabled() {
        let page = HtmlPage::new();
        let document = Html::parse_document(&page.document());
        assert_eq!(select(&document, "#results.hidden").len(), 1);
        assert_eq!(select(&document, "#downloadPDF[disabled]").len(), 1);
        assert_eq!(select(&document, "#jobDescription[disabled]").len(), 1);
    }
}
