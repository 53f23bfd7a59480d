// src/state.rs
use crate::types::AnalysisResult;

/// Session-wide state shared by the renderer and the exporter
#[derive(Debug, Default)]
pub struct AppState {
    last_analysis: Option<AnalysisResult>,
    export_enabled: bool,
    submission_in_flight: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache a fresh result, replacing any previous one, and enable export
    pub fn set(&mut self, result: AnalysisResult) {
        self.last_analysis = Some(result);
        self.export_enabled = true;
    }

    /// Back to the initial lifecycle point: no result, export disabled
    pub fn clear(&mut self) {
        self.last_analysis = None;
        self.export_enabled = false;
    }

    pub fn last_analysis(&self) -> Option<&AnalysisResult> {
        self.last_analysis.as_ref()
    }

    pub fn export_enabled(&self) -> bool {
        self.export_enabled
    }

    /// The result the exporter may use, if any
    pub fn exportable(&self) -> Option<&AnalysisResult> {
        if self.export_enabled {
            self.last_analysis.as_ref()
        } else {
            None
        }
    }

    pub fn submission_in_flight(&self) -> bool {
        self.submission_in_flight
    }

    pub(crate) fn set_submission_in_flight(&mut self, in_flight: bool) {
        self.submission_in_flight = in_flight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(rank: u8) -> AnalysisResult {
        serde_json::from_value(json!({ "rank": rank })).unwrap()
    }

    #[test]
    fn test_initially_disabled() {
        let state = AppState::new();
        assert!(!state.export_enabled());
        assert!(state.exportable().is_none());
    }

    #[test]
    fn test_set_replaces_previous_result() {
        let mut state = AppState::new();
        state.set(result(10));
        state.set(result(90));
        assert!(state.export_enabled());
        assert_eq!(state.exportable().map(|r| r.match_score), Some(90));
    }

    #[test]
    fn test_clear_drops_result() {
        let mut state = AppState::new();
        state.set(result(10));
        state.clear();
        assert!(!state.export_enabled());
        assert!(state.last_analysis().is_none());
    }
}
