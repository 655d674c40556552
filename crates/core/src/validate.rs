//! Quality checks over a deck read back from disk.
//!
//! Every check is a pure function of the extracted slides and a
//! [`DeckExpectations`]. [`validate`] runs them all and grades the result.

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

use crate::segment::Segment;
use crate::types::{ExtractedSlide, Presentation};

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        })
    }
}

/// A slide that satisfied part of a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub slide: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, detail: String) -> Self {
        Self {
            name: name.to_string(),
            status,
            detail,
            locations: Vec::new(),
        }
    }
}

/// A topic segment as the validator expects to find it.
#[derive(Debug, Clone)]
pub struct SegmentExpectation {
    pub number: usize,
    pub segment: Segment,
    pub name: &'static str,
    /// Slide numbers of the segment, used when the deck carries no tags.
    pub range: RangeInclusive<usize>,
}

/// What a complete deck is expected to contain.
#[derive(Debug, Clone)]
pub struct DeckExpectations {
    pub slide_count: usize,
    /// (topic, weight) pairs, one per divider.
    pub dividers: Vec<(&'static str, &'static str)>,
    pub segments: Vec<SegmentExpectation>,
    /// (name, marker) pairs every topic segment must contain.
    pub section_markers: Vec<(&'static str, &'static str)>,
    pub decision_matrices: Vec<&'static str>,
    pub opening_keywords: Vec<&'static str>,
    pub opening_slides: usize,
    pub closing_keywords: Vec<&'static str>,
    pub closing_slides: usize,
    pub course_topics: Vec<&'static str>,
    /// (weight, segment name) pairs that must appear somewhere in the deck.
    pub exam_weights: Vec<(&'static str, &'static str)>,
    pub min_table_slides: usize,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn deck_text(slides: &[ExtractedSlide]) -> String {
    slides
        .iter()
        .map(|s| s.full_text())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn check_slide_count(slides: &[ExtractedSlide], exp: &DeckExpectations) -> CheckResult {
    let count = slides.len();
    let status = if count == exp.slide_count {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };
    CheckResult::new(
        "slide_count",
        status,
        format!("Slide count: {count} (expected {})", exp.slide_count),
    )
}

/// Each divider must name its topic and carry its weight verbatim.
///
/// Only slides tagged as dividers are candidates when the deck has layout
/// tags, so agenda and objective slides mentioning the same weights do not
/// stand in for a missing divider.
pub fn check_segment_dividers(slides: &[ExtractedSlide], exp: &DeckExpectations) -> CheckResult {
    let tagged = slides.iter().any(|s| s.layout.is_some());
    let candidates: Vec<&ExtractedSlide> = slides
        .iter()
        .filter(|s| !tagged || s.is_divider())
        .collect();

    let mut locations = Vec::new();
    let mut issues = Vec::new();
    for (topic, weight) in &exp.dividers {
        let found = candidates.iter().find(|s| {
            let text = s.full_text();
            contains_ci(&text, topic) && text.contains(weight)
        });
        match found {
            Some(slide) => locations.push(Location {
                slide: slide.number,
                label: topic.to_string(),
            }),
            None => issues.push(format!(
                "Missing divider for '{topic}' with weight '{weight}'"
            )),
        }
    }

    let status = if locations.len() == exp.dividers.len() {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };
    let mut detail = format!(
        "Found {}/{} segment dividers",
        locations.len(),
        exp.dividers.len()
    );
    if !issues.is_empty() {
        detail.push_str(" | Issues: ");
        detail.push_str(&issues.join("; "));
    }

    let mut result = CheckResult::new("segment_dividers", status, detail);
    result.locations = locations;
    result
}

/// One result per topic segment.
pub fn check_segment_structure(
    slides: &[ExtractedSlide],
    exp: &DeckExpectations,
) -> Vec<CheckResult> {
    let tagged = slides.iter().any(|s| s.segment.is_some());

    exp.segments
        .iter()
        .map(|seg| {
            let texts: Vec<String> = slides
                .iter()
                .filter(|s| {
                    if tagged {
                        s.segment == Some(seg.segment)
                    } else {
                        seg.range.contains(&s.number)
                    }
                })
                .map(|s| s.full_text().to_lowercase())
                .collect();

            let missing: Vec<&str> = exp
                .section_markers
                .iter()
                .filter(|(_, marker)| !texts.iter().any(|t| t.contains(marker)))
                .map(|(name, _)| *name)
                .collect();

            let (status, summary) = if missing.is_empty() {
                (CheckStatus::Pass, "All required sections present".to_string())
            } else {
                (CheckStatus::Fail, format!("MISSING: {}", missing.join(", ")))
            };
            CheckResult::new(
                "segment_structure",
                status,
                format!("Segment {} ({}): {summary}", seg.number, seg.name),
            )
        })
        .collect()
}

pub fn check_decision_matrices(slides: &[ExtractedSlide], exp: &DeckExpectations) -> CheckResult {
    let texts: Vec<String> = slides.iter().map(|s| s.full_text().to_lowercase()).collect();
    let (found, missing): (Vec<&str>, Vec<&str>) = exp
        .decision_matrices
        .iter()
        .copied()
        .partition(|kw| texts.iter().any(|t| t.contains(&kw.to_lowercase())));

    let status = match found.len() {
        n if n >= 8 => CheckStatus::Pass,
        n if n >= 6 => CheckStatus::Warn,
        _ => CheckStatus::Fail,
    };
    let mut detail = format!(
        "Decision matrices found: {}/{}",
        found.len(),
        exp.decision_matrices.len()
    );
    if !missing.is_empty() {
        detail.push_str(&format!(" | Not found: {}", missing.join(", ")));
    }
    CheckResult::new("decision_matrices", status, detail)
}

fn keywords_in(slides: &[ExtractedSlide], keywords: &[&str]) -> usize {
    let texts: Vec<String> = slides.iter().map(|s| s.full_text().to_lowercase()).collect();
    keywords
        .iter()
        .filter(|kw| texts.iter().any(|t| t.contains(&kw.to_lowercase())))
        .count()
}

/// Returns the opening result, then the closing result.
pub fn check_opening_closing(
    slides: &[ExtractedSlide],
    exp: &DeckExpectations,
) -> (CheckResult, CheckResult) {
    let opening = &slides[..exp.opening_slides.min(slides.len())];
    let closing = &slides[slides.len().saturating_sub(exp.closing_slides)..];

    let opening_found = keywords_in(opening, &exp.opening_keywords);
    let closing_found = keywords_in(closing, &exp.closing_keywords);

    // Allow one miss on each side.
    let opening_status = if opening_found + 1 >= exp.opening_keywords.len() {
        CheckStatus::Pass
    } else {
        CheckStatus::Warn
    };
    let closing_status = if closing_found + 1 >= exp.closing_keywords.len() {
        CheckStatus::Pass
    } else {
        CheckStatus::Warn
    };

    (
        CheckResult::new(
            "opening",
            opening_status,
            format!(
                "Opening: {opening_found}/{} keywords matched",
                exp.opening_keywords.len()
            ),
        ),
        CheckResult::new(
            "closing",
            closing_status,
            format!(
                "Closing: {closing_found}/{} keywords matched",
                exp.closing_keywords.len()
            ),
        ),
    )
}

pub fn check_course_flow_alignment(
    slides: &[ExtractedSlide],
    exp: &DeckExpectations,
) -> CheckResult {
    let all_text = deck_text(slides).to_lowercase();
    let (found, missing): (Vec<&str>, Vec<&str>) = exp
        .course_topics
        .iter()
        .copied()
        .partition(|topic| all_text.contains(&topic.to_lowercase()));

    let status = match missing.len() {
        0 => CheckStatus::Pass,
        1..=3 => CheckStatus::Warn,
        _ => CheckStatus::Fail,
    };
    let mut detail = format!(
        "Course flow topics covered: {}/{}",
        found.len(),
        exp.course_topics.len()
    );
    if !missing.is_empty() {
        detail.push_str(&format!(" | Missing: {}", missing.join(", ")));
    }
    CheckResult::new("course_flow", status, detail)
}

pub fn check_exam_weights(slides: &[ExtractedSlide], exp: &DeckExpectations) -> CheckResult {
    let all_text = deck_text(slides);
    let found = exp
        .exam_weights
        .iter()
        .filter(|(weight, _)| all_text.contains(weight))
        .count();
    let status = if found == exp.exam_weights.len() {
        CheckStatus::Pass
    } else {
        CheckStatus::Warn
    };
    CheckResult::new(
        "exam_weights",
        status,
        format!("Exam weights verified: {found}/{}", exp.exam_weights.len()),
    )
}

/// Tables are recognised by the `" | "` cell separator in a line.
pub fn check_tables_present(slides: &[ExtractedSlide], exp: &DeckExpectations) -> CheckResult {
    let count = slides
        .iter()
        .filter(|s| s.texts().any(|line| line.contains(" | ")))
        .count();
    let status = if count >= exp.min_table_slides {
        CheckStatus::Pass
    } else {
        CheckStatus::Warn
    };
    CheckResult::new("tables", status, format!("Slides with tables: {count}"))
}

/// Letter grade derived from the PASS/WARN/FAIL counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
}

impl Grade {
    pub fn from_counts(warns: usize, fails: usize) -> Self {
        match (fails, warns) {
            (0, 0) => Grade::A,
            (0, w) if w <= 2 => Grade::AMinus,
            (0, _) => Grade::BPlus,
            (1, _) => Grade::B,
            (2, _) => Grade::C,
            _ => Grade::D,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub heading: String,
    pub results: Vec<CheckResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub number: usize,
    pub title: String,
}

/// Everything the validator found, ready to print or serialize.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub source: String,
    pub slide_size: Option<(i64, i64)>,
    pub sections: Vec<ReportSection>,
    pub manifest: Vec<ManifestEntry>,
    pub passes: usize,
    pub warns: usize,
    pub fails: usize,
    pub grade: Grade,
}

impl ValidationReport {
    pub fn results(&self) -> impl Iterator<Item = &CheckResult> {
        self.sections.iter().flat_map(|s| s.results.iter())
    }

    pub fn total(&self) -> usize {
        self.passes + self.warns + self.fails
    }

    pub fn has_failures(&self) -> bool {
        self.fails > 0
    }
}

/// Run every check and grade the deck.
pub fn validate(presentation: &Presentation, exp: &DeckExpectations) -> ValidationReport {
    let slides = presentation.slides.as_slice();
    let (opening, closing) = check_opening_closing(slides, exp);

    let sections = vec![
        ReportSection {
            heading: "1. SLIDE COUNT".into(),
            results: vec![check_slide_count(slides, exp)],
        },
        ReportSection {
            heading: "2. SEGMENT DIVIDERS".into(),
            results: vec![check_segment_dividers(slides, exp)],
        },
        ReportSection {
            heading: "3. SEGMENT STRUCTURE (Learning Obj, Content, Demo, Exam Tips, Review)".into(),
            results: check_segment_structure(slides, exp),
        },
        ReportSection {
            heading: "4. DECISION MATRICES".into(),
            results: vec![check_decision_matrices(slides, exp)],
        },
        ReportSection {
            heading: "5. OPENING & CLOSING SECTIONS".into(),
            results: vec![opening, closing],
        },
        ReportSection {
            heading: "6. COURSE FLOW ALIGNMENT".into(),
            results: vec![check_course_flow_alignment(slides, exp)],
        },
        ReportSection {
            heading: "7. EXAM WEIGHTS".into(),
            results: vec![check_exam_weights(slides, exp)],
        },
        ReportSection {
            heading: "8. TABLE CONTENT DENSITY".into(),
            results: vec![check_tables_present(slides, exp)],
        },
    ];

    let count = |status: CheckStatus| {
        sections
            .iter()
            .flat_map(|s| s.results.iter())
            .filter(|r| r.status == status)
            .count()
    };
    let passes = count(CheckStatus::Pass);
    let warns = count(CheckStatus::Warn);
    let fails = count(CheckStatus::Fail);

    let manifest = slides
        .iter()
        .map(|s| ManifestEntry {
            number: s.number,
            title: s.title().replace('\n', " ").chars().take(75).collect(),
        })
        .collect();

    log::debug!("Validated {} slides: {passes} pass, {warns} warn, {fails} fail", slides.len());

    ValidationReport {
        source: presentation.filename.clone(),
        slide_size: presentation.slide_size,
        sections,
        manifest,
        passes,
        warns,
        fails,
        grade: Grade::from_counts(warns, fails),
    }
}

/// Heading printed above every report, including one for a deck that
/// could not be loaded.
pub fn report_banner() -> String {
    let rule = "=".repeat(70);
    format!("{rule}\nAZ-305 PPTX VALIDATION REPORT\n{rule}\n")
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        write!(f, "{}", report_banner())?;
        writeln!(f)?;
        writeln!(f, "[PASS] PPTX loaded successfully: {}", self.source)?;
        if let Some((width, height)) = self.slide_size {
            writeln!(f, "       Slide dimensions: {width} x {height}")?;
        }

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{rule}")?;
            writeln!(f, "{}", section.heading)?;
            writeln!(f, "{rule}")?;
            for result in &section.results {
                writeln!(f, "   [{}] {}", result.status, result.detail)?;
                for loc in &result.locations {
                    writeln!(f, "     - Slide {}: {}", loc.slide, loc.label)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "SLIDE MANIFEST")?;
        writeln!(f, "{rule}")?;
        for entry in &self.manifest {
            writeln!(f, "   Slide {:2}: {}", entry.number, entry.title)?;
        }

        let total = self.total();
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "QUALITY ASSESSMENT")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "   PASS: {}/{total}", self.passes)?;
        writeln!(f, "   WARN: {}/{total}", self.warns)?;
        writeln!(f, "   FAIL: {}/{total}", self.fails)?;
        writeln!(f)?;
        writeln!(f, "   OVERALL GRADE: {}", self.grade)?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan;
    use crate::segment::SlideLayout;

    fn slide(number: usize, lines: &[&str]) -> ExtractedSlide {
        let mut slide = ExtractedSlide::new(number);
        for line in lines {
            slide.add_line(*line);
        }
        slide
    }

    #[test]
    fn test_grade_table() {
        assert_eq!(Grade::from_counts(0, 0), Grade::A);
        assert_eq!(Grade::from_counts(2, 0), Grade::AMinus);
        assert_eq!(Grade::from_counts(3, 0), Grade::BPlus);
        assert_eq!(Grade::from_counts(5, 1), Grade::B);
        assert_eq!(Grade::from_counts(0, 2), Grade::C);
        assert_eq!(Grade::from_counts(0, 3), Grade::D);
        assert_eq!(Grade::AMinus.to_string(), "A-");
    }

    #[test]
    fn test_dividers_ignore_untagged_mentions_when_tagged() {
        let exp = plan::expectations();
        let mut agenda = slide(5, &["Agenda", "Identity, Governance & Monitoring | 25-30%"]);
        agenda.layout = Some(SlideLayout::Content);

        let result = check_segment_dividers(&[agenda.clone()], &exp);
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.detail.contains("Missing divider for 'Identity, Governance'"));

        // Without any tags every slide is a candidate.
        agenda.layout = None;
        let result = check_segment_dividers(&[agenda], &exp);
        assert_eq!(result.locations.len(), 1);
        assert_eq!(result.locations[0].slide, 5);
    }

    #[test]
    fn test_structure_falls_back_to_ranges() {
        let exp = plan::expectations();
        let slides: Vec<ExtractedSlide> = (1..=30)
            .map(|n| match n {
                10 => slide(n, &["Segment 1 Learning Objectives"]),
                24 => slide(n, &["Segment 1 Demos"]),
                25 => slide(n, &["Segment 1 Exam Tips"]),
                26 => slide(n, &["Segment 1 Review Questions"]),
                _ => slide(n, &["Filler"]),
            })
            .collect();

        let results = check_segment_structure(&slides, &exp);
        assert_eq!(results[0].status, CheckStatus::Pass);
        assert_eq!(
            results[0].detail,
            "Segment 1 (Identity/Governance): All required sections present"
        );
        assert_eq!(results[1].status, CheckStatus::Fail);
        assert!(results[1]
            .detail
            .ends_with("MISSING: learning_objectives, demo_callout, exam_tips, review_questions"));
    }

    #[test]
    fn test_course_flow_thresholds() {
        let exp = plan::expectations();
        let all: Vec<&str> = exp.course_topics.clone();
        let full = slide(1, &all);
        assert_eq!(check_course_flow_alignment(&[full], &exp).status, CheckStatus::Pass);

        let short = slide(1, &all[..all.len() - 2]);
        let result = check_course_flow_alignment(&[short], &exp);
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(result.detail.ends_with("Missing: azure migrate, virtual wan"));

        let none = slide(1, &["nothing relevant"]);
        assert_eq!(check_course_flow_alignment(&[none], &exp).status, CheckStatus::Fail);
    }

    #[test]
    fn test_tables_counted_by_separator() {
        let mut exp = plan::expectations();
        exp.min_table_slides = 2;
        let slides = vec![
            slide(1, &["Title", "A | B"]),
            slide(2, &["Plain"]),
            slide(3, &["X | Y", "1 | 2"]),
        ];
        let result = check_tables_present(&slides, &exp);
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.detail, "Slides with tables: 2");
    }

    #[test]
    fn test_opening_closing_allow_one_miss() {
        let exp = plan::expectations();
        let slides = vec![
            slide(1, &["AZ-305", "About", "Course Objectives", "Exam Overview"]),
            slide(2, &["Agenda", "Cross-Cutting", "Well-Architected"]),
            slide(3, &["Recap", "Exam Day", "Study Resources"]),
        ];
        let (opening, closing) = check_opening_closing(&slides, &exp);
        // "how to use" is missing from the opening.
        assert_eq!(opening.status, CheckStatus::Pass);
        assert_eq!(opening.detail, "Opening: 7/8 keywords matched");
        // The last five slides are all three here; two closing keywords miss.
        assert_eq!(closing.status, CheckStatus::Warn);
    }

    #[test]
    fn test_built_deck_validates() {
        let deck = plan::build_az305_deck().unwrap();
        let presentation = Presentation::from_deck(&deck);
        let report = validate(&presentation, &plan::expectations());

        assert_eq!(report.fails, 0, "{report}");
        assert!(matches!(report.grade, Grade::A | Grade::AMinus));
        assert_eq!(report.total(), 13);
        assert_eq!(report.manifest.len(), 97);
        assert_eq!(report.manifest[11].title, "Authentication Decision Matrix");
        assert_eq!(report.manifest[8].title, "Identity, Governance & Monitoring");
        assert!(report.manifest.iter().all(|e| !e.title.contains('\n')));
    }

    #[test]
    fn test_report_text_layout() {
        let deck = plan::build_az305_deck().unwrap();
        let report = validate(&Presentation::from_deck(&deck), &plan::expectations());
        let text = report.to_string();

        assert!(text.starts_with(&report_banner()));
        assert!(text.contains("   Slide  9: Identity, Governance & Monitoring\n"));
        assert!(text.contains("AZ-305 PPTX VALIDATION REPORT"));
        assert!(text.contains("   [PASS] Slide count: 97 (expected 97)"));
        assert!(text.contains("     - Slide 9: Identity, Governance"));
        assert!(text.contains("   Slide  1: AZ-305: Designing Microsoft Azure"));
        assert!(text.contains("OVERALL GRADE:"));
    }

    #[test]
    fn test_banner_frames_heading() {
        let banner = report_banner();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(70));
        assert_eq!(lines[1], "AZ-305 PPTX VALIDATION REPORT");
        assert_eq!(lines[2], lines[0]);
    }
}
