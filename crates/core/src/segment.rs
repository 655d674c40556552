//! Segments and layouts, and the slide tag that records both in the artifact.
//!
//! Every slide is written with a `"<segment>/<layout>"` tag so readers can
//! group slides without relying on slide-number ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the topic groupings of the deck, plus the opening and closing blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Opening,
    Identity,
    DataStorage,
    Continuity,
    Compute,
    Networking,
    Closing,
}

impl Segment {
    /// All segments in deck order.
    pub const ALL: [Segment; 7] = [
        Segment::Opening,
        Segment::Identity,
        Segment::DataStorage,
        Segment::Continuity,
        Segment::Compute,
        Segment::Networking,
        Segment::Closing,
    ];

    /// The five topic segments that carry an exam weight.
    pub const TOPICS: [Segment; 5] = [
        Segment::Identity,
        Segment::DataStorage,
        Segment::Continuity,
        Segment::Compute,
        Segment::Networking,
    ];

    /// Label rendered in the bottom-left footer of every slide.
    pub fn footer_label(self) -> &'static str {
        match self {
            Segment::Opening => "Opening",
            Segment::Identity => "Segment 1: Identity, Governance & Monitoring",
            Segment::DataStorage => "Segment 2: Data Storage Solutions",
            Segment::Continuity => "Segment 3: Business Continuity & HA",
            Segment::Compute => "Segment 4: Compute & Application Architecture",
            Segment::Networking => "Segment 5: Networking & Migrations",
            Segment::Closing => "Closing",
        }
    }

    /// Exam weight of a topic segment.
    pub fn exam_weight(self) -> Option<&'static str> {
        match self {
            Segment::Identity => Some("25-30%"),
            Segment::DataStorage => Some("20-25%"),
            Segment::Continuity => Some("15-20%"),
            Segment::Compute => Some("~17%"),
            Segment::Networking => Some("~18%"),
            Segment::Opening | Segment::Closing => None,
        }
    }

    /// Whether this is one of the weighted topic segments.
    pub fn is_topic(self) -> bool {
        self.exam_weight().is_some()
    }

    /// Short machine tag stored in the artifact.
    pub fn tag(self) -> &'static str {
        match self {
            Segment::Opening => "opening",
            Segment::Identity => "identity",
            Segment::DataStorage => "data",
            Segment::Continuity => "bcdr",
            Segment::Compute => "compute",
            Segment::Networking => "networking",
            Segment::Closing => "closing",
        }
    }

    /// Parse a tag written by [`Segment::tag`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.footer_label())
    }
}

/// Visual layout kind of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideLayout {
    /// Full-background title or closing slide.
    Title,
    /// Full-background slide marking the start of a segment.
    Divider,
    /// Header bar plus content.
    Content,
    /// Light gold background with a pink header bar.
    ExamTip,
}

impl SlideLayout {
    pub fn tag(self) -> &'static str {
        match self {
            SlideLayout::Title => "title",
            SlideLayout::Divider => "divider",
            SlideLayout::Content => "content",
            SlideLayout::ExamTip => "exam-tip",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "title" => Some(SlideLayout::Title),
            "divider" => Some(SlideLayout::Divider),
            "content" => Some(SlideLayout::Content),
            "exam-tip" => Some(SlideLayout::ExamTip),
            _ => None,
        }
    }
}

/// Format the tag stored on a slide.
pub fn slide_tag(segment: Segment, layout: SlideLayout) -> String {
    format!("{}/{}", segment.tag(), layout.tag())
}

/// Parse a slide tag. Either half may be unknown.
pub fn parse_slide_tag(tag: &str) -> (Option<Segment>, Option<SlideLayout>) {
    match tag.split_once('/') {
        Some((segment, layout)) => (Segment::from_tag(segment), SlideLayout::from_tag(layout)),
        None => (Segment::from_tag(tag), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_tag_round_trip() {
        for segment in Segment::ALL {
            let tag = slide_tag(segment, SlideLayout::ExamTip);
            assert_eq!(
                parse_slide_tag(&tag),
                (Some(segment), Some(SlideLayout::ExamTip))
            );
        }
    }

    #[test]
    fn test_parse_unknown_tag() {
        assert_eq!(parse_slide_tag(""), (None, None));
        assert_eq!(parse_slide_tag("Blank"), (None, None));
        assert_eq!(
            parse_slide_tag("data/poster"),
            (Some(Segment::DataStorage), None)
        );
    }

    #[test]
    fn test_only_topics_have_weights() {
        assert!(Segment::TOPICS.iter().all(|s| s.is_topic()));
        assert!(!Segment::Opening.is_topic());
        assert!(!Segment::Closing.is_topic());
        assert_eq!(Segment::Compute.exam_weight(), Some("~17%"));
    }
}
