// src/render/mod.rs
//! Rendering adapters. Surfaces only draw what the view model tells them.

pub mod console;
pub mod html;

pub use console::ConsolePage;
pub use html::HtmlPage;

use tracing::debug;

use crate::catalog::JobSelector;
use crate::state::AppState;
use crate::types::AnalysisResult;
use crate::view_model::{
    BadgeList, BadgeRegion, BreakdownRow, ExperienceView, ProjectList, ResultViewModel, ScoreBar,
};

/// Display regions of the results section plus the controls tied to it
pub trait ResultSurface {
    fn show_match_score(&mut self, score: &ScoreBar);
    fn show_experience(&mut self, experience: &ExperienceView);
    fn show_badges(&mut self, region: BadgeRegion, badges: &BadgeList);
    fn show_breakdown(&mut self, rows: &[BreakdownRow]);
    fn show_projects(&mut self, projects: &ProjectList);
    fn set_results_visible(&mut self, visible: bool);
    fn set_export_enabled(&mut self, enabled: bool);
    fn scroll_to_results(&mut self);
}

/// Form-level controls and user notifications
pub trait PageControls {
    fn alert(&mut self, message: &str);
    fn set_loading(&mut self, loading: bool);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn show_job_selector(&mut self, selector: &JobSelector);
}

pub struct ResultRenderer;

impl ResultRenderer {
    /// Render `result`, cache it as the last analysis and reveal the results
    pub fn display<S>(result: AnalysisResult, state: &mut AppState, surface: &mut S)
    where
        S: ResultSurface + ?Sized,
    {
        let view = ResultViewModel::from_result(&result);
        Self::paint(&view, surface);

        state.set(result);
        surface.set_results_visible(true);
        surface.set_export_enabled(true);
        surface.scroll_to_results();
        debug!("Displayed analysis with match score {}%", view.match_score.percent);
    }

    /// Update every region; regions are independent of each other
    pub fn paint<S>(view: &ResultViewModel, surface: &mut S)
    where
        S: ResultSurface + ?Sized,
    {
        surface.show_match_score(&view.match_score);
        surface.show_experience(&view.experience);
        for region in [
            BadgeRegion::Skills,
            BadgeRegion::ProjectCategories,
            BadgeRegion::MissingSkills,
        ] {
            surface.show_badges(region, view.badges(region));
        }
        surface.show_breakdown(&view.breakdown);
        surface.show_projects(&view.projects);
    }

    /// Hide results and disable export before a new analysis starts
    pub fn reset<S>(state: &mut AppState, surface: &mut S)
    where
        S: ResultSurface + ?Sized,
    {
        state.clear();
        surface.set_export_enabled(false);
        surface.set_results_visible(false);
    }
}
