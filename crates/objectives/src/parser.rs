//! Extraction of the skills-measured outline from the exam page HTML.

use chrono::NaiveDate;
use deck_core::{Error, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::types::{ExamObjectives, ObjectiveSection};

/// Heading that opens the outline.
static SKILLS_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)skills\s+measured").unwrap());

/// Headings and lists, visited in document order.
static OUTLINE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, h3, ul").unwrap());

/// Format of [`ExamObjectives::last_updated`].
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Parse the skills-measured section of an exam page.
///
/// Each `h3` after the section's `h2` starts a section; the `li` items of
/// the lists that follow it, up to the next `h2`, are its skills.
pub fn parse_objectives(html: &str, today: NaiveDate) -> Result<ExamObjectives> {
    let document = Html::parse_document(html);
    let mut elements = document.select(&OUTLINE_SELECTOR);

    elements
        .by_ref()
        .find(|el| el.value().name() == "h2" && SKILLS_HEADING_REGEX.is_match(&element_text(el)))
        .ok_or_else(|| Error::SectionNotFound("Skills measured".into()))?;

    let mut sections: Vec<ObjectiveSection> = Vec::new();
    for el in elements {
        match el.value().name() {
            "h2" => break,
            "h3" => sections.push(ObjectiveSection::new(element_text(&el))),
            "ul" if !is_nested_list(&el) => {
                let Some(section) = sections.last_mut() else {
                    log::debug!("Skipping list before the first section heading");
                    continue;
                };
                section.items.extend(
                    el.children()
                        .filter_map(ElementRef::wrap)
                        .filter(|li| li.value().name() == "li")
                        .map(|li| element_text(&li))
                        .filter(|text| !text.is_empty()),
                );
            }
            _ => {}
        }
    }

    log::debug!(
        "Parsed {} sections with {} skills",
        sections.len(),
        sections.iter().map(|s| s.items.len()).sum::<usize>()
    );

    Ok(ExamObjectives {
        last_updated: today.format(DATE_FORMAT).to_string(),
        sections,
    })
}

/// Whether a list sits inside another list.
fn is_nested_list(el: &ElementRef) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| matches!(a.value().name(), "ul" | "ol"))
}

/// Visible text of an element, NFC-normalized with whitespace collapsed.
fn element_text(el: &ElementRef) -> String {
    let raw: String = el.text().collect();
    let normalized: String = raw.nfc().collect();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    const PAGE: &str = r#"
        <html><body>
          <h2>Exam overview</h2>
          <h3>Not a section</h3>
          <ul><li>Ignored</li></ul>
          <h2 id="skills">Skills measured</h2>
          <ul><li>Orphan list</li></ul>
          <h3>Design identity, governance, and monitoring solutions (25–30%)</h3>
          <ul>
            <li>Design solutions   for logging
                and monitoring</li>
            <li>Design authentication <ul><li>Nested detail</li></ul></li>
          </ul>
          <h3>Design data storage solutions (20–25%)</h3>
          <p>Intro</p>
          <ul><li>Design relational data storage</li></ul>
          <ul><li>Design data integration</li></ul>
          <h2>Study resources</h2>
          <ul><li>After the section</li></ul>
        </body></html>
    "#;

    #[test]
    fn test_parse_sections_and_items() {
        let objectives = parse_objectives(PAGE, today()).unwrap();

        assert_eq!(objectives.last_updated, "January 05, 2026");
        assert_eq!(objectives.sections.len(), 2);

        let identity = &objectives.sections[0];
        assert_eq!(
            identity.title,
            "Design identity, governance, and monitoring solutions (25–30%)"
        );
        assert_eq!(identity.items.len(), 2);
        assert_eq!(identity.items[0], "Design solutions for logging and monitoring");
        assert_eq!(identity.items[1], "Design authentication Nested detail");

        assert_eq!(
            objectives.sections[1].items,
            vec!["Design relational data storage", "Design data integration"]
        );
        assert_eq!(objectives.item_count(), 4);
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let err = parse_objectives("<h2>Overview</h2><h3>x</h3>", today()).unwrap_err();
        assert!(matches!(err, Error::SectionNotFound(_)));
        assert_eq!(err.to_string(), "Could not find Skills measured section");
    }

    #[test]
    fn test_text_is_nfc_normalized() {
        let html = "<h2>Skills Measured</h2><h3>Cafe\u{0301}</h3><ul><li>a</li></ul>";
        let objectives = parse_objectives(html, today()).unwrap();
        assert_eq!(objectives.sections[0].title, "Caf\u{00E9}");
    }
}
