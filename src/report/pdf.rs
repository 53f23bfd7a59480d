// src/report/pdf.rs
//! genpdf-backed document builder

use anyhow::{Context as _, Result};
use genpdf::elements::{Break, BulletPoint, PageBreak, Paragraph};
use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use genpdf::render::Area;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{Alignment, Context, Document, Element, Mm, PaperSize, Position, RenderResult, Size, SimplePageDecorator};

use super::{fonts, DocumentBuilder, REPORT_TITLE};
use crate::core::ReportConfig;
use crate::view_model::ScoreBar;

/// A4 is 210 mm wide, so 20 mm margins leave 170 mm for flowed text
const PAGE_MARGIN_MM: i32 = 20;
const BODY_FONT_SIZE: u8 = 12;
const TITLE_FONT_SIZE: u8 = 20;
const HEADING_FONT_SIZE: u8 = 16;
const SUBHEADING_FONT_SIZE: u8 = 13;
const FOOTER_FONT_SIZE: u8 = 10;

const BAR_THICKNESS_MM: f64 = 4.0;
const BAR_GAP_MM: f64 = 1.5;
// genpdf strokes at a fixed width, so a bar is a band of hairlines this far apart.
const BAR_STROKE_STEP_MM: f64 = 0.25;
const TRACK_COLOR: Color = Color::Rgb(229, 231, 235);
const FILL_COLOR: Color = Color::Rgb(79, 70, 229);

pub struct GenPdfBuilder {
    document: Document,
}

impl GenPdfBuilder {
    pub fn new(font_family: FontFamily<FontData>) -> Self {
        let mut document = Document::new(font_family);
        document.set_title(REPORT_TITLE);
        document.set_paper_size(PaperSize::A4);
        document.set_font_size(BODY_FONT_SIZE);
        document.set_line_spacing(1.25);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(PAGE_MARGIN_MM);
        document.set_page_decorator(decorator);

        Self { document }
    }

    /// Builder with fonts resolved from the report configuration
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        let font_family = fonts::load_font_family(config)?;
        Ok(Self::new(font_family))
    }

    fn push_styled(&mut self, text: &str, style: Style) {
        self.document
            .push(Paragraph::new(StyledString::new(text.to_string(), style)));
    }
}

impl DocumentBuilder for GenPdfBuilder {
    fn add_title(&mut self, text: &str) {
        let style = Style::new().bold().with_font_size(TITLE_FONT_SIZE);
        self.document.push(
            Paragraph::new(StyledString::new(text.to_string(), style)).aligned(Alignment::Center),
        );
        self.document.push(Break::new(1.5));
    }

    fn add_heading(&mut self, text: &str) {
        self.document.push(Break::new(0.5));
        self.push_styled(text, Style::new().bold().with_font_size(HEADING_FONT_SIZE));
    }

    fn add_subheading(&mut self, text: &str) {
        self.document.push(Break::new(0.5));
        self.push_styled(text, Style::new().bold().with_font_size(SUBHEADING_FONT_SIZE));
    }

    fn add_paragraph(&mut self, text: &str) {
        self.document.push(Paragraph::new(text.to_string()));
    }

    fn add_bullet(&mut self, text: &str) {
        self.document
            .push(BulletPoint::new(Paragraph::new(text.to_string())).with_bullet("•"));
    }

    fn add_bar(&mut self, label: &str, percent: u8) {
        self.document.push(ScoreBarElement::new(label, percent));
    }

    fn add_footer(&mut self, lines: &[String]) {
        self.document.push(Break::new(2));
        let style = Style::new().with_font_size(FOOTER_FONT_SIZE);
        for line in lines {
            self.document.push(
                Paragraph::new(StyledString::new(line.clone(), style)).aligned(Alignment::Center),
            );
        }
    }

    fn new_page(&mut self) {
        self.document.push(PageBreak::new());
    }

    fn new_page_if_needed(&mut self, min_height_mm: f64) {
        self.document.push(RequireSpace::new(min_height_mm));
    }

    fn finish(self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.document
            .render(&mut bytes)
            .context("Failed to render PDF document")?;
        Ok(bytes)
    }
}

/// Breaks the page when less than `min_height` remains; a no-op otherwise
struct RequireSpace {
    min_height: Mm,
    done: bool,
}

impl RequireSpace {
    fn new(min_height_mm: f64) -> Self {
        Self {
            min_height: Mm::from(min_height_mm),
            done: false,
        }
    }
}

impl Element for RequireSpace {
    fn render(
        &mut self,
        _context: &Context,
        area: Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        // Defer at most once. A non-zero width keeps genpdf from treating the
        // deferral as an element that fits on no page.
        if !self.done && area.size().height < self.min_height {
            result.size = Size::new(1, 0);
            result.has_more = true;
        }
        self.done = true;
        Ok(result)
    }
}

/// One breakdown row: label, right-aligned percentage, proportional bar
struct ScoreBarElement {
    label: String,
    score: ScoreBar,
}

impl ScoreBarElement {
    fn new(label: &str, percent: u8) -> Self {
        Self {
            label: label.to_string(),
            score: ScoreBar::new(percent),
        }
    }
}

impl Element for ScoreBarElement {
    fn render(
        &mut self,
        context: &Context,
        area: Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        let line_height = style.line_height(&context.font_cache);
        let height = line_height + Mm::from(BAR_GAP_MM * 2.0 + BAR_THICKNESS_MM);
        let width = area.size().width;

        if area.size().height < height {
            result.has_more = true;
            return Ok(result);
        }

        area.print_str(&context.font_cache, Position::new(0, 0), style, &self.label)?;

        let percent = self.score.label();
        let percent_width = style.str_width(&context.font_cache, &percent);
        area.print_str(
            &context.font_cache,
            Position::new(width - percent_width, 0),
            style,
            &percent,
        )?;

        let bar_top = line_height + Mm::from(BAR_GAP_MM);
        draw_band(&area, width, bar_top, TRACK_COLOR);
        if self.score.percent > 0 {
            let filled = width * (f64::from(self.score.percent) / 100.0);
            draw_band(&area, filled, bar_top, FILL_COLOR);
        }

        result.size = Size::new(width, height);
        Ok(result)
    }
}

/// Fill a `BAR_THICKNESS_MM` band from the left edge to `width`
fn draw_band(area: &Area<'_>, width: Mm, top: Mm, color: Color) {
    let style = Style::new().with_color(color);
    let strokes = (BAR_THICKNESS_MM / BAR_STROKE_STEP_MM).round() as usize;
    for i in 0..=strokes {
        let y = top + Mm::from(i as f64 * BAR_STROKE_STEP_MM);
        area.draw_line(vec![Position::new(0, y), Position::new(width, y)], style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportExporter;
    use crate::state::AppState;
    use crate::types::AnalysisResult;
    use chrono::Local;
    use serde_json::{json, Value};

    fn builder() -> Option<GenPdfBuilder> {
        match GenPdfBuilder::from_config(&ReportConfig::default()) {
            Ok(builder) => Some(builder),
            Err(e) => {
                eprintln!("skipping PDF rendering, no font available: {:#}", e);
                None
            }
        }
    }

    fn render(data: Value) -> Option<Vec<u8>> {
        let builder = builder()?;
        let result: AnalysisResult = serde_json::from_value(data).unwrap();
        let mut state = AppState::new();
        state.set(result);

        let report =
            ReportExporter::export_at(&state, Some("Backend Engineer"), || Ok(builder), Local::now())
                .unwrap()
                .unwrap();
        assert_eq!(report.filename, "backend_engineer_analyze.pdf");
        Some(report.bytes)
    }

    /// Page objects in the file, ignoring the `/Pages` tree node
    fn page_count(bytes: &[u8]) -> usize {
        let compact: Vec<u8> = bytes
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        compact
            .windows(11)
            .filter(|w| w.starts_with(b"/Type/Page") && w[10] != b's')
            .count()
    }

    #[test]
    fn test_renders_breakdown_on_second_page_with_non_latin_text() {
        let Some(bytes) = render(json!({
            "rank": 72,
            "total_experience": 2,
            "skills": ["Go", "SQL", "Résumé parsing"],
            "missing_skills": ["Kubernetes"],
            "project_category": ["Backend"],
            "project_description": {
                "API Gateway": "Built a routing layer.",
                "Data pipeline": "Kafka → Spark ≥ 10k events/s, Конвейер данных"
            },
            "score_breakdown": {"skills": 80, "experience": 40, "projects": 60, "keywords": 70}
        })) else {
            return;
        };

        assert!(bytes.starts_with(b"%PDF"));
        assert!(page_count(&bytes) > 1);
    }

    #[test]
    fn test_report_without_breakdown_fits_one_page() {
        let Some(bytes) = render(json!({"rank": 20, "skills": ["Go"]})) else {
            return;
        };
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_many_projects_flow_across_pages() {
        let projects: serde_json::Map<String, Value> = (0..40)
            .map(|i| {
                (
                    format!("Project {:02}", i),
                    Value::String("Designed and shipped a service used across teams. ".repeat(6)),
                )
            })
            .collect();
        let Some(bytes) = render(json!({
            "rank": 55,
            "project_description": projects
        })) else {
            return;
        };
        assert!(page_count(&bytes) > 2);
    }
}
