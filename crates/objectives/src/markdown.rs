//! Markdown rendering of the exam outline.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{ExamObjectives, ObjectiveSection};

/// A percentage range such as `(25–30%)`, written with an en or em dash.
static WEIGHT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+[–—]\d+%)\)").unwrap());

/// Section keywords and their emoji, checked in order.
const SECTION_EMOJI: &[(&str, &str)] = &[
    ("identity", "🔐"),
    ("data", "💾"),
    ("business", "🔄"),
    ("infrastructure", "🏗️"),
    ("compute", "🖥️"),
    ("application", "🏛️"),
    ("migration", "🚀"),
    ("network", "🌐"),
];

const FALLBACK_EMOJI: &str = "📌";

/// Emoji for a section title: the first keyword the title contains.
pub fn section_emoji(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    SECTION_EMOJI
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(FALLBACK_EMOJI)
}

/// Title without its parenthetical weight.
fn short_title(title: &str) -> &str {
    title.split('(').next().unwrap_or(title).trim()
}

fn weight(title: &str) -> Option<&str> {
    WEIGHT_REGEX
        .captures(title)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// `"<title> (<weight>)"`, or just the title when it has no weight.
fn labelled(section: &ObjectiveSection) -> String {
    let title = short_title(&section.title);
    match weight(&section.title) {
        Some(w) => format!("{title} ({w})"),
        None => title.to_string(),
    }
}

/// Render the outline as the Markdown summary document.
pub fn render_markdown(objectives: &ExamObjectives) -> String {
    let mut lines = vec![
        "# 🏆 AZ-305: Azure Solutions Architect Expert".to_string(),
        String::new(),
        format!("> 📅 {}", objectives.last_updated),
        String::new(),
        "## 🎯 Exam Sections".to_string(),
        String::new(),
    ];
    lines.extend(objectives.sections.iter().map(|s| format!("- {}", labelled(s))));

    lines.push(String::new());
    lines.push("## 📚 Technical Requirements".to_string());
    for (i, section) in objectives.sections.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!(
            "### {}. {} {}",
            i + 1,
            section_emoji(&section.title),
            labelled(section)
        ));
        lines.push(String::new());
        lines.extend(section.items.iter().map(|item| format!("- {item}")));
    }

    let mut md = lines.join("\n");
    md.push('\n');
    md
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objectives(sections: Vec<ObjectiveSection>) -> ExamObjectives {
        ExamObjectives {
            last_updated: "January 05, 2026".into(),
            sections,
        }
    }

    #[test]
    fn test_render_identity_section() {
        let md = render_markdown(&objectives(vec![ObjectiveSection {
            title: "Identity (25–30%)".into(),
            items: vec!["a".into(), "b".into()],
        }]));

        assert!(md.starts_with("# 🏆 AZ-305: Azure Solutions Architect Expert\n"));
        assert!(md.contains("> 📅 January 05, 2026\n"));
        assert!(md.contains("- Identity (25–30%)\n"));
        assert!(md.contains("### 1. 🔐 Identity (25–30%)\n"));
        assert!(md.contains("\n- a\n- b\n"));
    }

    #[test]
    fn test_document_layout() {
        let md = render_markdown(&objectives(vec![ObjectiveSection {
            title: "Design data storage solutions (20–25%)".into(),
            items: vec!["Recommend a storage tier".into()],
        }]));
        let expected = "# 🏆 AZ-305: Azure Solutions Architect Expert\n\n\
            > 📅 January 05, 2026\n\n\
            ## 🎯 Exam Sections\n\n\
            - Design data storage solutions (20–25%)\n\n\
            ## 📚 Technical Requirements\n\n\
            ### 1. 💾 Design data storage solutions (20–25%)\n\n\
            - Recommend a storage tier\n";
        assert_eq!(md, expected);
    }

    #[test]
    fn test_weight_omitted_when_absent() {
        let md = render_markdown(&objectives(vec![ObjectiveSection {
            title: "Design something else (approx. 20 percent)".into(),
            items: vec![],
        }]));
        assert!(md.contains("- Design something else\n"));
        assert!(md.contains("### 1. 📌 Design something else\n"));
    }

    #[test]
    fn test_section_emoji_order_and_case() {
        assert_eq!(section_emoji("Design data storage solutions"), "💾");
        assert_eq!(section_emoji("Design infrastructure solutions"), "🏗️");
        assert_eq!(section_emoji("Design business continuity solutions"), "🔄");
        // "identity" is checked before "data"
        assert_eq!(section_emoji("Identity data"), "🔐");
        assert_eq!(section_emoji("Something unrelated"), "📌");
    }

    #[test]
    fn test_hyphen_is_not_a_weight() {
        assert_eq!(weight("Compute (15-20%)"), None);
        assert_eq!(weight("Compute (15—20%)"), Some("15—20%"));
    }
}
