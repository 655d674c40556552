//! Fetch, parse, render and write in one step.

use chrono::NaiveDate;
use deck_core::{Error, Fetch, Result};
use std::fs;
use std::path::Path;

use crate::markdown::render_markdown;
use crate::parser::parse_objectives;
use crate::types::ExamObjectives;

/// Environment variable holding the exam page URL.
pub const EXAM_URL_VAR: &str = "EXAM_URL";

/// Where the Markdown summary is written by default.
pub const DEFAULT_OUTPUT: &str = "az305-exam-metadata/az305-OD.md";

/// Read the exam page URL from the environment, loading `.env` first.
pub fn exam_url_from_env() -> Result<String> {
    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }
    std::env::var(EXAM_URL_VAR)
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| Error::MissingEnv(EXAM_URL_VAR.into()))
}

/// Fetch the exam page and write its outline as Markdown to `output`.
pub fn sync_objectives<F: Fetch>(
    fetcher: &F,
    url: &str,
    output: &Path,
    today: NaiveDate,
) -> Result<ExamObjectives> {
    log::info!("Fetching exam objectives from {url}");
    let page = fetcher.get(url)?;

    let objectives = parse_objectives(&page.text(), today)?;
    let markdown = render_markdown(&objectives);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, markdown)?;

    log::info!(
        "Wrote {} sections ({} skills) to {}",
        objectives.sections.len(),
        objectives.item_count(),
        output.display()
    );
    Ok(objectives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::Fetched;

    struct StaticPage(&'static str);

    impl Fetch for StaticPage {
        fn get(&self, url: &str) -> Result<Fetched> {
            Ok(Fetched {
                url: url.to_string(),
                status: 200,
                content_type: "text/html".into(),
                body: self.0.as_bytes().to_vec(),
            })
        }
    }

    struct NotFound;

    impl Fetch for NotFound {
        fn get(&self, url: &str) -> Result<Fetched> {
            Err(Error::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_sync_writes_markdown_under_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("az305-exam-metadata").join("az305-OD.md");
        let page = StaticPage(
            "<h2>Skills measured</h2>\
             <h3>Design infrastructure solutions (30–35%)</h3>\
             <ul><li>Design compute solutions</li></ul>",
        );

        let objectives = sync_objectives(&page, "https://example.com/exam", &output, today()).unwrap();
        assert_eq!(objectives.sections.len(), 1);

        let md = fs::read_to_string(&output).unwrap();
        assert!(md.contains("> 📅 March 14, 2026"));
        assert!(md.contains("### 1. 🏗️ Design infrastructure solutions (30–35%)"));
        assert!(md.contains("- Design compute solutions"));
    }

    #[test]
    fn test_sync_fails_without_section() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.md");
        let err = sync_objectives(&StaticPage("<h2>Other</h2>"), "u", &output, today()).unwrap_err();
        assert!(matches!(err, Error::SectionNotFound(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_sync_propagates_http_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = sync_objectives(&NotFound, "u", &dir.path().join("o.md"), today()).unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    }
}
