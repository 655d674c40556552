//! Authored deck model: slides and the content blocks placed on them.
//!
//! Blocks are write-only descriptions. Higher-level blocks (bullet lists,
//! review questions) are lowered to plain [`TextFrame`]s for serialization.

use crate::segment::{Segment, SlideLayout};
use crate::theme::{Color, Emu, Font, BLACK, DARK_BLUE, GREEN, SLIDE_HEIGHT, SLIDE_WIDTH};

/// Position and size of a block on the slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Frame {
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Frame given in inches.
    pub fn inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(
            Emu::inches(left),
            Emu::inches(top),
            Emu::inches(width),
            Emu::inches(height),
        )
    }

    /// The whole slide.
    pub fn full_slide() -> Self {
        Self::new(Emu(0), Emu(0), SLIDE_WIDTH, SLIDE_HEIGHT)
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Character formatting of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Font size in whole points.
    pub size: u32,
    pub bold: bool,
    pub color: Color,
    pub font: Font,
}

impl TextStyle {
    pub fn new(size: u32, color: Color) -> Self {
        Self {
            size,
            bold: false,
            color,
            font: Font::Regular,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(18, BLACK)
    }
}

/// A span of uniformly formatted text. `\n` becomes a line break.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub style: TextStyle,
}

impl Run {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A paragraph of runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub align: Align,
    /// Spacing before, in points.
    pub space_before: Option<u32>,
    /// Spacing after, in points.
    pub space_after: Option<u32>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            runs,
            ..Self::default()
        }
    }

    pub fn single(text: impl Into<String>, style: TextStyle) -> Self {
        Self::new(vec![Run::new(text, style)])
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn spacing(mut self, before: Option<u32>, after: Option<u32>) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// The text body of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
}

impl TextFrame {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            word_wrap: true,
        }
    }
}

/// A free-standing text box holding a single paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub frame: Frame,
    pub text: String,
    pub style: TextStyle,
    pub align: Align,
}

impl TextBox {
    pub fn new(frame: Frame, text: impl Into<String>) -> Self {
        Self {
            frame,
            text: text.into(),
            style: TextStyle::default(),
            align: Align::Left,
        }
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.style.size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.style.font = font;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn text_frame(&self) -> TextFrame {
        TextFrame::new(vec![
            Paragraph::single(self.text.clone(), self.style).align(self.align)
        ])
    }
}

/// A bulleted list, one paragraph per item.
#[derive(Debug, Clone, PartialEq)]
pub struct BulletList {
    pub frame: Frame,
    pub items: Vec<String>,
    pub style: TextStyle,
    /// Render the text up to the first `": "` in bold.
    pub bold_prefix: bool,
}

impl BulletList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frame: Frame::inches(0.8, 1.5, 11.5, 5.2),
            items: items.into_iter().map(Into::into).collect(),
            style: TextStyle::default(),
            bold_prefix: true,
        }
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.style.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    /// Move the list's top edge, keeping its other dimensions.
    pub fn top(mut self, inches: f64) -> Self {
        self.frame.top = Emu::inches(inches);
        self
    }

    pub fn frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn plain(mut self) -> Self {
        self.bold_prefix = false;
        self
    }

    pub fn text_frame(&self) -> TextFrame {
        let paragraphs = self
            .items
            .iter()
            .map(|item| {
                let runs = match item.split_once(": ") {
                    Some((prefix, rest)) if self.bold_prefix => vec![
                        Run::new(format!("\u{2022} {prefix}: "), self.style.bold()),
                        Run::new(rest, self.style),
                    ],
                    _ => vec![Run::new(format!("\u{2022} {item}"), self.style)],
                };
                Paragraph::new(runs).spacing(Some(6), Some(6))
            })
            .collect();
        TextFrame::new(paragraphs)
    }
}

/// A table whose first row is the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub left: Emu,
    pub top: Emu,
    pub col_widths: Vec<Emu>,
    pub row_height: Emu,
    pub rows: Vec<Vec<String>>,
    pub font_size: u32,
    pub header_fill: Color,
}

impl Table {
    /// Build a table from rows of cells and column widths in inches.
    pub fn new<R, S>(rows: &[R], col_widths: &[f64]) -> Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Self {
            left: Emu::inches(0.5),
            top: Emu::inches(1.5),
            col_widths: col_widths.iter().map(|w| Emu::inches(*w)).collect(),
            row_height: Emu::inches(0.45),
            rows: rows
                .iter()
                .map(|row| row.as_ref().iter().map(|c| c.as_ref().to_string()).collect())
                .collect(),
            font_size: 14,
            header_fill: crate::theme::AZURE_BLUE,
        }
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn top(mut self, inches: f64) -> Self {
        self.top = Emu::inches(inches);
        self
    }

    pub fn width(&self) -> Emu {
        self.col_widths.iter().copied().sum()
    }

    pub fn height(&self) -> Emu {
        self.row_height * self.rows.len() as i64
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.left, self.top, self.width(), self.height())
    }

    /// Style of a cell's text; header cells are bold white.
    pub fn cell_style(&self, row: usize) -> TextStyle {
        if row == 0 {
            TextStyle::new(self.font_size, crate::theme::WHITE).bold()
        } else {
            TextStyle::new(self.font_size, BLACK)
        }
    }

    /// Fill of a row: header colour, then alternating white and light gray.
    pub fn row_fill(&self, row: usize) -> Color {
        if row == 0 {
            self.header_fill
        } else if row % 2 == 0 {
            crate::theme::LIGHT_GRAY
        } else {
            crate::theme::WHITE
        }
    }
}

/// Numbered scenario questions, each followed by its answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewQuestions {
    pub frame: Frame,
    pub pairs: Vec<(String, String)>,
}

impl ReviewQuestions {
    pub fn text_frame(&self) -> TextFrame {
        let mut paragraphs = Vec::with_capacity(self.pairs.len() * 2);
        for (i, (question, answer)) in self.pairs.iter().enumerate() {
            let before = if i == 0 { None } else { Some(14) };
            paragraphs.push(
                Paragraph::single(
                    format!("Q{}: {question}", i + 1),
                    TextStyle::new(16, DARK_BLUE).bold(),
                )
                .spacing(before, None),
            );
            paragraphs.push(
                Paragraph::single(format!("   Answer: {answer}"), TextStyle::new(15, GREEN))
                    .spacing(Some(4), Some(4)),
            );
        }
        TextFrame::new(paragraphs)
    }
}

/// Preset geometry of a decorative shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    LightningBolt,
}

impl ShapeKind {
    /// DrawingML preset geometry name.
    pub fn preset(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::RoundedRectangle => "roundRect",
            ShapeKind::LightningBolt => "lightningBolt",
        }
    }
}

/// A filled, borderless auto shape, optionally holding text.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub frame: Frame,
    pub fill: Color,
    pub text: Option<TextFrame>,
}

impl Shape {
    pub fn new(kind: ShapeKind, frame: Frame, fill: Color) -> Self {
        Self {
            kind,
            frame,
            fill,
            text: None,
        }
    }

    pub fn with_text(mut self, paragraphs: Vec<Paragraph>) -> Self {
        self.text = Some(TextFrame::new(paragraphs));
        self
    }
}

/// A block placed on a slide.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(TextBox),
    Bullets(BulletList),
    Table(Table),
    Review(ReviewQuestions),
    Shape(Shape),
}

impl ContentBlock {
    pub fn frame(&self) -> Frame {
        match self {
            ContentBlock::Text(tb) => tb.frame,
            ContentBlock::Bullets(list) => list.frame,
            ContentBlock::Table(table) => table.frame(),
            ContentBlock::Review(review) => review.frame,
            ContentBlock::Shape(shape) => shape.frame,
        }
    }
}

/// One authored slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// 1-based slide number.
    pub number: usize,
    pub segment: Segment,
    pub layout: SlideLayout,
    pub blocks: Vec<ContentBlock>,
}

impl Slide {
    pub fn new(number: usize, segment: Segment, layout: SlideLayout) -> Self {
        Self {
            number,
            segment,
            layout,
            blocks: Vec::new(),
        }
    }

    /// All visible text on the slide, paragraph by paragraph, in reading
    /// order (top to bottom, then left to right).
    pub fn texts(&self) -> Vec<String> {
        let mut blocks: Vec<&ContentBlock> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| {
            let frame = b.frame();
            (frame.top, frame.left)
        });

        let mut texts = Vec::new();
        for block in blocks {
            match block {
                ContentBlock::Text(tb) => texts.push(tb.text.clone()),
                ContentBlock::Bullets(list) => texts.extend(
                    list.text_frame().paragraphs.iter().map(Paragraph::text),
                ),
                ContentBlock::Review(review) => texts.extend(
                    review.text_frame().paragraphs.iter().map(Paragraph::text),
                ),
                ContentBlock::Table(table) => {
                    texts.extend(table.rows.iter().map(|row| row.join(" | ")))
                }
                ContentBlock::Shape(shape) => {
                    if let Some(frame) = &shape.text {
                        texts.extend(frame.paragraphs.iter().map(Paragraph::text));
                    }
                }
            }
        }
        texts
    }
}

/// A finished deck ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub title: String,
    pub width: Emu,
    pub height: Emu,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slides belonging to one segment, in order.
    pub fn segment_slides(&self, segment: Segment) -> impl Iterator<Item = &Slide> {
        self.slides.iter().filter(move |s| s.segment == segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_bold_prefix() {
        let list = BulletList::new(["Tenant: A dedicated instance", "No prefix here"]);
        let frame = list.text_frame();

        assert_eq!(frame.paragraphs.len(), 2);
        let first = &frame.paragraphs[0];
        assert_eq!(first.runs.len(), 2);
        assert_eq!(first.runs[0].text, "\u{2022} Tenant: ");
        assert!(first.runs[0].style.bold);
        assert!(!first.runs[1].style.bold);
        assert_eq!(first.text(), "\u{2022} Tenant: A dedicated instance");
        assert_eq!(frame.paragraphs[1].runs.len(), 1);
    }

    #[test]
    fn test_bullet_plain_keeps_single_run() {
        let frame = BulletList::new(["Key: value"]).plain().text_frame();
        assert_eq!(frame.paragraphs[0].runs.len(), 1);
        assert!(!frame.paragraphs[0].runs[0].style.bold);
    }

    #[test]
    fn test_table_geometry_and_fills() {
        let table = Table::new(&[["A", "B"], ["1", "2"], ["3", "4"]], &[2.0, 3.0]);
        assert_eq!(table.width(), Emu::inches(5.0));
        assert_eq!(table.height(), Emu::inches(0.45) * 3);
        assert_eq!(table.row_fill(0), crate::theme::AZURE_BLUE);
        assert_eq!(table.row_fill(1), crate::theme::WHITE);
        assert_eq!(table.row_fill(2), crate::theme::LIGHT_GRAY);
        assert!(table.cell_style(0).bold);
    }

    #[test]
    fn test_review_questions_numbering() {
        let review = ReviewQuestions {
            frame: Frame::inches(0.8, 1.5, 11.5, 5.5),
            pairs: vec![
                ("Why?".to_string(), "Because.".to_string()),
                ("How?".to_string(), "Carefully.".to_string()),
            ],
        };
        let texts: Vec<String> = review.text_frame().paragraphs.iter().map(Paragraph::text).collect();
        assert_eq!(
            texts,
            vec![
                "Q1: Why?",
                "   Answer: Because.",
                "Q2: How?",
                "   Answer: Carefully."
            ]
        );
    }
}
