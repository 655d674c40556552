//! Types for presentation content read back from a deck file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Deck;
use crate::segment::{Segment, SlideLayout};

/// A presentation as read from disk, reduced to its visible text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    /// Original filename (without path).
    pub filename: String,

    /// Detected format of the source file.
    pub format: PresentationFormat,

    /// Slide size in EMU, if the package declares one.
    pub slide_size: Option<(i64, i64)>,

    /// Slides in presentation order.
    pub slides: Vec<ExtractedSlide>,
}

impl Presentation {
    /// Create a new presentation with the given filename and format.
    pub fn new(filename: impl Into<String>, format: PresentationFormat) -> Self {
        Self {
            filename: filename.into(),
            format,
            slide_size: None,
            slides: Vec::new(),
        }
    }

    /// View an in-memory deck the way a reader of its file would see it.
    pub fn from_deck(deck: &Deck) -> Self {
        let mut presentation = Self::new(deck.title.clone(), PresentationFormat::Pptx);
        presentation.slide_size = Some((deck.width.value(), deck.height.value()));
        for slide in &deck.slides {
            let mut extracted = ExtractedSlide::new(slide.number);
            extracted.segment = Some(slide.segment);
            extracted.layout = Some(slide.layout);
            for text in slide.texts() {
                extracted.add_line(text);
            }
            presentation.add_slide(extracted);
        }
        presentation
    }

    /// Add a slide to the presentation.
    pub fn add_slide(&mut self, slide: ExtractedSlide) {
        self.slides.push(slide);
    }
}

/// The format of the source presentation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationFormat {
    /// Office Open XML presentation.
    Pptx,
}

impl PresentationFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pptx" => Some(Self::Pptx),
            _ => None,
        }
    }

    /// Detect format from file magic bytes.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        // PPTX is a ZIP file (PK\x03\x04)
        if bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
            return Some(Self::Pptx);
        }
        None
    }

    /// Detect the format of `path` from its leading bytes, falling back to
    /// the extension.
    pub fn detect(magic: &[u8], path: &Path) -> Result<Self> {
        Self::from_magic(magic)
            .or_else(|| {
                path.extension()
                    .and_then(|e| e.to_str())
                    .and_then(Self::from_extension)
            })
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
    }
}

/// A single slide read back from a deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSlide {
    /// 1-based slide number.
    pub number: usize,

    /// Segment recorded in the slide tag, if any.
    pub segment: Option<Segment>,

    /// Layout recorded in the slide tag, if any.
    pub layout: Option<SlideLayout>,

    /// Non-empty text lines, in reading order.
    pub lines: Vec<SlideText>,
}

impl ExtractedSlide {
    /// Create a new slide with the given number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            segment: None,
            layout: None,
            lines: Vec::new(),
        }
    }

    /// Add a text line. Blank lines are dropped and the rest trimmed.
    pub fn add_line(&mut self, text: impl Into<String>) {
        let text = text.into();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.lines.push(SlideText::new(trimmed));
        }
    }

    /// Add a text line with position information.
    pub fn add_line_with_position(&mut self, text: impl Into<String>, y: f64, x: f64) {
        let text = text.into();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.lines.push(SlideText::with_position(trimmed, y, x));
        }
    }

    /// Sort lines by position (top-to-bottom, then left-to-right).
    ///
    /// The sort is stable, so paragraphs of one shape keep their order.
    pub fn sort_by_position(&mut self) {
        self.lines.sort_by(|a, b| {
            let y_cmp = a
                .y_position
                .partial_cmp(&b.y_position)
                .unwrap_or(std::cmp::Ordering::Equal);
            if y_cmp == std::cmp::Ordering::Equal {
                a.x_position
                    .partial_cmp(&b.x_position)
                    .unwrap_or(std::cmp::Ordering::Equal)
            } else {
                y_cmp
            }
        });
    }

    /// Text lines in reading order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }

    /// The first line, which is the slide title for every layout in the deck.
    pub fn title(&self) -> &str {
        self.lines
            .first()
            .map(|l| l.text.as_str())
            .unwrap_or("(no text)")
    }

    /// All lines joined with newlines.
    pub fn full_text(&self) -> String {
        self.texts().collect::<Vec<_>>().join("\n")
    }

    pub fn is_divider(&self) -> bool {
        self.layout == Some(SlideLayout::Divider)
    }
}

/// One paragraph of visible text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideText {
    /// The actual text content.
    pub text: String,

    /// Y position for ordering (top-to-bottom). None if unknown.
    pub y_position: Option<f64>,

    /// X position for ordering (left-to-right). None if unknown.
    pub x_position: Option<f64>,
}

impl SlideText {
    /// Create new slide text without position info.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            y_position: None,
            x_position: None,
        }
    }

    /// Create new slide text with position info.
    pub fn with_position(text: impl Into<String>, y: f64, x: f64) -> Self {
        Self {
            text: text.into(),
            y_position: Some(y),
            x_position: Some(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DeckBuilder;

    #[test]
    fn test_format_from_magic() {
        assert_eq!(
            PresentationFormat::from_magic(b"PK\x03\x04rest"),
            Some(PresentationFormat::Pptx)
        );
        assert_eq!(PresentationFormat::from_magic(b"%PDF-1.7"), None);
        assert_eq!(PresentationFormat::from_magic(b"PK"), None);
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        let detected = PresentationFormat::detect(b"????", Path::new("deck.PPTX")).unwrap();
        assert_eq!(detected, PresentationFormat::Pptx);

        let err = PresentationFormat::detect(b"%PDF", Path::new("notes.pdf")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref name) if name == "notes.pdf"));
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let mut slide = ExtractedSlide::new(1);
        slide.add_line("   ");
        slide.add_line("  Title  ");
        assert_eq!(slide.title(), "Title");
        assert_eq!(ExtractedSlide::new(2).title(), "(no text)");
    }

    #[test]
    fn test_sort_keeps_paragraph_order_within_shape() {
        let mut slide = ExtractedSlide::new(1);
        slide.add_line_with_position("footer", 7.0, 0.5);
        slide.add_line_with_position("first", 1.5, 0.8);
        slide.add_line_with_position("second", 1.5, 0.8);
        slide.add_line_with_position("title", 0.15, 0.5);
        slide.sort_by_position();
        assert_eq!(slide.full_text(), "title\nfirst\nsecond\nfooter");
    }

    #[test]
    fn test_from_deck_puts_title_first() {
        let mut builder = DeckBuilder::new("Deck");
        builder.add_content_slide("Agenda", Segment::Opening, Some("Today"));
        let presentation = Presentation::from_deck(&builder.finish());

        let slide = &presentation.slides[0];
        assert_eq!(slide.title(), "Agenda");
        assert_eq!(slide.segment, Some(Segment::Opening));
        assert_eq!(slide.layout, Some(SlideLayout::Content));
        assert!(slide.full_text().ends_with("Opening\n1"));
    }
}
