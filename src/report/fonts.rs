// src/report/fonts.rs
//! Font lookup for the PDF builder. Fonts are embedded in the document.

use anyhow::Result;
use genpdf::fonts::{FontData, FontFamily};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::ReportConfig;

/// How the four styles of a family are named on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontNaming {
    /// `{family}-Regular.ttf`, `-Bold`, `-Italic`, `-BoldItalic`
    Styled,
    /// `{family}.ttf`, `-Bold`, `-Oblique`, `-BoldOblique` (DejaVu)
    Oblique,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCandidate {
    pub dir: PathBuf,
    pub family: String,
    pub naming: FontNaming,
}

impl FontCandidate {
    fn new(dir: impl Into<PathBuf>, family: &str, naming: FontNaming) -> Self {
        Self {
            dir: dir.into(),
            family: family.to_string(),
            naming,
        }
    }

    /// Regular, bold, italic and bold-italic file paths
    pub fn files(&self) -> [PathBuf; 4] {
        let suffixes = match self.naming {
            FontNaming::Styled => ["-Regular", "-Bold", "-Italic", "-BoldItalic"],
            FontNaming::Oblique => ["", "-Bold", "-Oblique", "-BoldOblique"],
        };
        suffixes.map(|suffix| self.dir.join(format!("{}{}.ttf", self.family, suffix)))
    }

    fn load(&self) -> Result<FontFamily<FontData>, genpdf::error::Error> {
        let [regular, bold, italic, bold_italic] = self.files();
        Ok(FontFamily {
            regular: FontData::load(regular, None)?,
            bold: FontData::load(bold, None)?,
            italic: FontData::load(italic, None)?,
            bold_italic: FontData::load(bold_italic, None)?,
        })
    }
}

/// Configured font first, then common system locations
pub fn font_candidates(config: &ReportConfig) -> Vec<FontCandidate> {
    let mut candidates = vec![FontCandidate::new(
        &config.font_dir,
        &config.font_family,
        FontNaming::Styled,
    )];
    let fallbacks = [
        FontCandidate::new("/usr/share/fonts/truetype/liberation", "LiberationSans", FontNaming::Styled),
        FontCandidate::new("/usr/share/fonts/liberation-sans", "LiberationSans", FontNaming::Styled),
        FontCandidate::new("/usr/share/fonts/liberation", "LiberationSans", FontNaming::Styled),
        FontCandidate::new("/usr/share/fonts/truetype/dejavu", "DejaVuSans", FontNaming::Oblique),
        FontCandidate::new("/usr/share/fonts/dejavu", "DejaVuSans", FontNaming::Oblique),
        FontCandidate::new("/Library/Fonts", "Arial", FontNaming::Styled),
    ];
    for fallback in fallbacks {
        if !candidates.contains(&fallback) {
            candidates.push(fallback);
        }
    }
    candidates
}

pub fn load_font_family(config: &ReportConfig) -> Result<FontFamily<FontData>> {
    let candidates = font_candidates(config);

    for candidate in &candidates {
        match candidate.load() {
            Ok(family) => {
                info!(
                    "Using font family {} from {}",
                    candidate.family,
                    candidate.dir.display()
                );
                return Ok(family);
            }
            Err(e) => debug!(
                "Font family {} not usable in {}: {}",
                candidate.family,
                candidate.dir.display(),
                e
            ),
        }
    }

    let searched: Vec<String> = candidates
        .iter()
        .map(|c| c.files()[0].display().to_string())
        .collect();
    anyhow::bail!(
        "No usable font family found for the PDF report. Searched: {}",
        searched.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_font_comes_first_without_duplicates() {
        let config = ReportConfig::default();
        let candidates = font_candidates(&config);
        assert_eq!(
            candidates[0],
            FontCandidate::new(&config.font_dir, &config.font_family, FontNaming::Styled)
        );
        let configured = candidates
            .iter()
            .filter(|c| c.dir == config.font_dir && c.family == config.font_family)
            .count();
        assert_eq!(configured, 1);
    }

    #[test]
    fn test_file_naming() {
        let styled = FontCandidate::new("/fonts", "LiberationSans", FontNaming::Styled);
        assert_eq!(styled.files()[0], PathBuf::from("/fonts/LiberationSans-Regular.ttf"));
        assert_eq!(styled.files()[3], PathBuf::from("/fonts/LiberationSans-BoldItalic.ttf"));

        let oblique = FontCandidate::new("/fonts", "DejaVuSans", FontNaming::Oblique);
        assert_eq!(oblique.files()[0], PathBuf::from("/fonts/DejaVuSans.ttf"));
        assert_eq!(oblique.files()[2], PathBuf::from("/fonts/DejaVuSans-Oblique.ttf"));
    }

    #[test]
    fn test_missing_fonts_error_lists_search_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig {
            font_dir: dir.path().to_path_buf(),
            font_family: "NoSuchFont".to_string(),
            ..ReportConfig::default()
        };
        if let Err(e) = load_font_family(&config) {
            assert!(e.to_string().contains("NoSuchFont-Regular.ttf"));
        }
    }
}
