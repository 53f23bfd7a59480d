// src/view_model.rs
//! Pure transformation from an analysis result to what each display region shows

use crate::types::{AnalysisResult, BreakdownCategory};

/// Match scores at or above this are shown in the high color
pub const HIGH_SCORE_THRESHOLD: u8 = 50;
/// Candidates with fewer years than this are freshers
pub const EXPERIENCED_THRESHOLD_YEARS: f64 = 3.0;

pub const NO_SKILLS: &str = "No skills found";
pub const NO_MISSING_SKILLS: &str = "No missing skills";
pub const NO_CATEGORIES: &str = "No project categories found";
pub const NO_PROJECTS: &str = "No project descriptions available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    High,
    Low,
}

impl ScoreTone {
    pub fn color(self) -> &'static str {
        match self {
            ScoreTone::High => "#10B981",
            ScoreTone::Low => "#EF4444",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreTone::High => "score-high",
            ScoreTone::Low => "score-low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBar {
    pub percent: u8,
    pub tone: ScoreTone,
}

impl ScoreBar {
    pub fn new(percent: u8) -> Self {
        let percent = percent.min(100);
        let tone = if percent >= HIGH_SCORE_THRESHOLD {
            ScoreTone::High
        } else {
            ScoreTone::Low
        };
        Self { percent, tone }
    }

    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Fresher,
    Experienced,
}

impl ExperienceLevel {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "Fresher",
            ExperienceLevel::Experienced => "Experienced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceView {
    pub level: ExperienceLevel,
    pub years: f64,
}

impl ExperienceView {
    pub fn classify(years: Option<f64>) -> Self {
        let years = years.filter(|y| y.is_finite()).unwrap_or(0.0).max(0.0);
        let level = if years < EXPERIENCED_THRESHOLD_YEARS {
            ExperienceLevel::Fresher
        } else {
            ExperienceLevel::Experienced
        };
        Self { level, years }
    }

    /// "1 year", "2 years", "2.5 years"
    pub fn years_text(&self) -> String {
        let rounded = (self.years * 10.0).round() / 10.0;
        if rounded == 1.0 {
            "1 year".to_string()
        } else {
            format!("{} years", rounded)
        }
    }

    /// "Fresher (2 years)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.level.label(), self.years_text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRegion {
    Skills,
    MissingSkills,
    ProjectCategories,
}

impl BadgeRegion {
    pub fn element_id(self) -> &'static str {
        match self {
            BadgeRegion::Skills => "skills",
            BadgeRegion::MissingSkills => "missingSkills",
            BadgeRegion::ProjectCategories => "categories",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            BadgeRegion::Skills => NO_SKILLS,
            BadgeRegion::MissingSkills => NO_MISSING_SKILLS,
            BadgeRegion::ProjectCategories => NO_CATEGORIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeList {
    Badges(Vec<String>),
    Placeholder(&'static str),
}

impl BadgeList {
    pub fn for_region(region: BadgeRegion, items: &[String]) -> Self {
        if items.is_empty() {
            BadgeList::Placeholder(region.placeholder())
        } else {
            BadgeList::Badges(items.to_vec())
        }
    }

    pub fn badges(&self) -> &[String] {
        match self {
            BadgeList::Badges(items) => items,
            BadgeList::Placeholder(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakdownRow {
    pub category: BreakdownCategory,
    pub percent: u8,
}

impl BreakdownRow {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBlock {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectList {
    Blocks(Vec<ProjectBlock>),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultViewModel {
    pub match_score: ScoreBar,
    pub experience: ExperienceView,
    pub skills: BadgeList,
    pub missing_skills: BadgeList,
    pub project_categories: BadgeList,
    /// Always the four categories, in display order
    pub breakdown: Vec<BreakdownRow>,
    pub has_breakdown: bool,
    pub projects: ProjectList,
}

impl ResultViewModel {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let breakdown = BreakdownCategory::ALL
            .iter()
            .map(|&category| BreakdownRow {
                category,
                percent: result
                    .score_breakdown
                    .as_ref()
                    .map(|b| b.score(category))
                    .unwrap_or(0),
            })
            .collect();

        let projects = if result.project_descriptions.is_empty() {
            ProjectList::Placeholder(NO_PROJECTS)
        } else {
            ProjectList::Blocks(
                result
                    .project_descriptions
                    .iter()
                    .map(|(name, description)| ProjectBlock {
                        name: name.clone(),
                        description: description.clone(),
                    })
                    .collect(),
            )
        };

        Self {
            match_score: ScoreBar::new(result.match_score),
            experience: ExperienceView::classify(result.total_experience_years),
            skills: BadgeList::for_region(BadgeRegion::Skills, &result.skills),
            missing_skills: BadgeList::for_region(BadgeRegion::MissingSkills, &result.missing_skills),
            project_categories: BadgeList::for_region(
                BadgeRegion::ProjectCategories,
                &result.project_categories,
            ),
            breakdown,
            has_breakdown: result.score_breakdown.is_some(),
            projects,
        }
    }

    pub fn badges(&self, region: BadgeRegion) -> &BadgeList {
        match region {
            BadgeRegion::Skills => &self.skills,
            BadgeRegion::MissingSkills => &self.missing_skills,
            BadgeRegion::ProjectCategories => &self.project_categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(value: serde_json::Value) -> ResultViewModel {
        ResultViewModel::from_result(&serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_score_threshold() {
        assert_eq!(ScoreBar::new(49).tone, ScoreTone::Low);
        assert_eq!(ScoreBar::new(50).tone, ScoreTone::High);
        assert_eq!(ScoreBar::new(0).tone, ScoreTone::Low);
        assert_eq!(ScoreBar::new(100).tone, ScoreTone::High);
        assert_eq!(ScoreBar::new(72).label(), "72%");
    }

    #[test]
    fn test_experience_classification() {
        let cases = [
            (None, "Fresher (0 years)"),
            (Some(0.0), "Fresher (0 years)"),
            (Some(1.0), "Fresher (1 year)"),
            (Some(2.0), "Fresher (2 years)"),
            (Some(2.5), "Fresher (2.5 years)"),
            (Some(3.0), "Experienced (3 years)"),
            (Some(12.0), "Experienced (12 years)"),
        ];
        for (years, expected) in cases {
            assert_eq!(ExperienceView::classify(years).label(), expected, "{:?}", years);
        }
    }

    #[test]
    fn test_empty_lists_become_placeholders() {
        let model = view(json!({"rank": 10}));
        assert_eq!(model.skills, BadgeList::Placeholder(NO_SKILLS));
        assert_eq!(model.missing_skills, BadgeList::Placeholder(NO_MISSING_SKILLS));
        assert_eq!(model.project_categories, BadgeList::Placeholder(NO_CATEGORIES));
        assert_eq!(model.projects, ProjectList::Placeholder(NO_PROJECTS));
        assert!(model.skills.badges().is_empty());
    }

    #[test]
    fn test_breakdown_missing_key_defaults_to_zero() {
        let model = view(json!({
            "score_breakdown": {"skills": 80, "experience": 40, "projects": 60}
        }));
        let percents: Vec<u8> = model.breakdown.iter().map(|row| row.percent).collect();
        assert_eq!(percents, vec![80, 40, 60, 0]);
        assert!(model.has_breakdown);
    }

    #[test]
    fn test_absent_breakdown_renders_zeros() {
        let model = view(json!({"rank": 30}));
        assert!(!model.has_breakdown);
        assert_eq!(model.breakdown.len(), 4);
        assert!(model.breakdown.iter().all(|row| row.percent == 0));
    }

    #[test]
    fn test_project_blocks() {
        let model = view(json!({
            "project_description": {"API Gateway": "Built a routing layer."}
        }));
        assert_eq!(
            model.projects,
            ProjectList::Blocks(vec![ProjectBlock {
                name: "API Gateway".to_string(),
                description: "Built a routing layer.".to_string(),
            }])
        );
    }
}
