//! Slide-by-slide deck construction.
//!
//! Slide numbers come from the builder's slide list, so each creation call
//! returns a slide that already knows its position and footer.

use crate::error::{Error, Result};
use crate::model::{
    Align, BulletList, ContentBlock, Deck, Frame, Paragraph, ReviewQuestions, Shape, ShapeKind,
    Slide, Table, TextBox, TextStyle,
};
use crate::segment::{Segment, SlideLayout};
use crate::theme::{
    Emu, Font, AZURE_BLUE, DARK_BLUE, GOLD, LIGHT_GOLD, MID_GRAY, PINK, SLIDE_HEIGHT, SLIDE_WIDTH,
    WHITE,
};

/// Builds a [`Deck`] one slide at a time.
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    title: String,
    slides: Vec<Slide>,
}

impl DeckBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slides: Vec::new(),
        }
    }

    /// Number of slides added so far.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn push(&mut self, segment: Segment, layout: SlideLayout) -> &mut Slide {
        self.slides
            .push(Slide::new(self.slides.len() + 1, segment, layout));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Dark full-background slide with a gold accent bar, used to open and close the deck.
    pub fn add_title_slide(&mut self, segment: Segment, accent_bar_top: f64) -> &mut Slide {
        let slide = self.push(segment, SlideLayout::Title);
        slide.add_shape(Shape::new(
            ShapeKind::Rectangle,
            Frame::full_slide(),
            DARK_BLUE,
        ));
        slide.add_shape(Shape::new(
            ShapeKind::Rectangle,
            Frame::new(Emu(0), Emu::inches(accent_bar_top), SLIDE_WIDTH, Emu::inches(0.06)),
            GOLD,
        ));
        add_footer(slide);
        slide
    }

    /// Full dark-blue divider with a centred title and a gold weight badge.
    pub fn add_divider_slide(&mut self, title: &str, badge: &str, segment: Segment) -> &mut Slide {
        let slide = self.push(segment, SlideLayout::Divider);
        slide.add_shape(Shape::new(
            ShapeKind::Rectangle,
            Frame::full_slide(),
            DARK_BLUE,
        ));
        slide.add_text(
            TextBox::new(Frame::inches(1.0, 2.0, 11.0, 2.0), title)
                .font_size(44)
                .bold()
                .color(WHITE)
                .align(Align::Center)
                .font(Font::Semibold),
        );
        slide.add_shape(
            Shape::new(
                ShapeKind::RoundedRectangle,
                Frame::inches(4.5, 4.5, 4.3, 0.8),
                GOLD,
            )
            .with_text(vec![Paragraph::single(
                badge,
                TextStyle::new(22, DARK_BLUE).bold().font(Font::Semibold),
            )
            .align(Align::Center)
            .spacing(Some(8), None)]),
        );
        add_footer(slide);
        slide
    }

    /// Standard slide with an Azure-blue header bar.
    pub fn add_content_slide(
        &mut self,
        title: &str,
        segment: Segment,
        subtitle: Option<&str>,
    ) -> &mut Slide {
        let slide = self.push(segment, SlideLayout::Content);
        add_header_bar(slide, title, subtitle, AZURE_BLUE);
        add_footer(slide);
        slide
    }

    /// Light-gold slide with a pink header bar and a fixed "EXAM TIPS" subtitle.
    pub fn add_exam_tip_slide(&mut self, title: &str, segment: Segment) -> &mut Slide {
        let slide = self.push(segment, SlideLayout::ExamTip);
        slide.add_shape(Shape::new(
            ShapeKind::Rectangle,
            Frame::full_slide(),
            LIGHT_GOLD,
        ));
        add_header_bar(slide, title, Some("EXAM TIPS"), PINK);
        add_footer(slide);
        slide
    }

    pub fn finish(self) -> Deck {
        Deck {
            title: self.title,
            width: SLIDE_WIDTH,
            height: SLIDE_HEIGHT,
            slides: self.slides,
        }
    }
}

impl Slide {
    pub fn add_text(&mut self, text: TextBox) -> &mut Self {
        self.blocks.push(ContentBlock::Text(text));
        self
    }

    pub fn add_shape(&mut self, shape: Shape) -> &mut Self {
        self.blocks.push(ContentBlock::Shape(shape));
        self
    }

    pub fn add_bullet_list(&mut self, list: BulletList) -> &mut Self {
        self.blocks.push(ContentBlock::Bullets(list));
        self
    }

    /// Add a table. Every row must have as many cells as the header.
    pub fn add_table(&mut self, table: Table) -> Result<&mut Self> {
        let expected = match table.rows.first() {
            Some(header) if !header.is_empty() => header.len(),
            _ => return Err(Error::EmptyTable { slide: self.number }),
        };
        if let Some((row, cells)) = table
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(Error::RaggedTable {
                slide: self.number,
                row: row + 1,
                expected,
                found: cells.len(),
            });
        }
        if table.col_widths.len() != expected {
            return Err(Error::RaggedTable {
                slide: self.number,
                row: 0,
                expected,
                found: table.col_widths.len(),
            });
        }
        self.blocks.push(ContentBlock::Table(table));
        Ok(self)
    }

    pub fn add_review_questions<I, Q, A>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<String>,
        A: Into<String>,
    {
        self.blocks.push(ContentBlock::Review(ReviewQuestions {
            frame: Frame::inches(0.8, 1.5, 11.5, 5.5),
            pairs: pairs
                .into_iter()
                .map(|(q, a)| (q.into(), a.into()))
                .collect(),
        }));
        self
    }

    /// Lightning-bolt icon, "Live Demo Exercises" heading and the demo items.
    pub fn add_demo<I, S>(&mut self, demos: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_shape(Shape::new(
            ShapeKind::LightningBolt,
            Frame::inches(0.8, 1.5, 0.6, 0.6),
            GOLD,
        ));
        self.add_text(
            TextBox::new(Frame::inches(1.6, 1.5, 6.0, 0.5), "Live Demo Exercises")
                .font_size(22)
                .bold()
                .color(DARK_BLUE),
        );
        self.add_bullet_list(BulletList::new(demos).frame(Frame::inches(1.0, 2.3, 11.0, 4.5)))
    }
}

fn add_header_bar(
    slide: &mut Slide,
    title: &str,
    subtitle: Option<&str>,
    bar: crate::theme::Color,
) {
    slide.add_shape(Shape::new(
        ShapeKind::Rectangle,
        Frame::new(Emu(0), Emu(0), SLIDE_WIDTH, Emu::inches(1.2)),
        bar,
    ));
    slide.add_text(
        TextBox::new(Frame::inches(0.5, 0.15, 12.0, 0.6), title)
            .font_size(28)
            .bold()
            .color(WHITE)
            .font(Font::Semibold),
    );
    if let Some(subtitle) = subtitle {
        slide.add_text(
            TextBox::new(Frame::inches(0.5, 0.72, 12.0, 0.4), subtitle)
                .font_size(16)
                .color(WHITE),
        );
    }
}

/// Segment label bottom-left, slide number bottom-right.
fn add_footer(slide: &mut Slide) {
    let label = slide.segment.footer_label();
    let number = slide.number.to_string();
    slide.add_text(
        TextBox::new(Frame::inches(0.5, 7.0, 6.0, 0.4), label)
            .font_size(10)
            .color(MID_GRAY),
    );
    slide.add_text(
        TextBox::new(Frame::inches(12.0, 7.0, 1.0, 0.4), number)
            .font_size(10)
            .color(MID_GRAY)
            .align(Align::Right),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_slide_list() {
        let mut deck = DeckBuilder::new("Test");
        deck.add_title_slide(Segment::Opening, 2.8);
        deck.add_content_slide("Agenda", Segment::Opening, None);
        deck.add_divider_slide("Data", "20-25% of Exam", Segment::DataStorage);

        let deck = deck.finish();
        let numbers: Vec<usize> = deck.slides.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(deck.slides[2].layout, SlideLayout::Divider);
    }

    #[test]
    fn test_footer_carries_segment_and_number() {
        let mut deck = DeckBuilder::new("Test");
        deck.add_content_slide("One", Segment::Opening, None);
        let slide = deck.add_exam_tip_slide("Tips", Segment::Compute);

        let texts = slide.texts();
        assert!(texts.contains(&"Segment 4: Compute & Application Architecture".to_string()));
        assert!(texts.contains(&"2".to_string()));
        assert!(texts.contains(&"EXAM TIPS".to_string()));
    }

    #[test]
    fn test_footer_follows_background() {
        let mut deck = DeckBuilder::new("Test");
        deck.add_title_slide(Segment::Opening, 2.8);
        deck.add_divider_slide("Data", "20-25% of Exam", Segment::DataStorage);
        deck.add_exam_tip_slide("Tips", Segment::DataStorage);

        for slide in &deck.finish().slides {
            let background = slide
                .blocks
                .iter()
                .position(|b| matches!(b, ContentBlock::Shape(s) if s.frame == Frame::full_slide()))
                .unwrap();
            let number = slide
                .blocks
                .iter()
                .position(|b| matches!(b, ContentBlock::Text(t) if t.text == slide.number.to_string()))
                .unwrap();
            assert!(number > background, "slide {} footer under background", slide.number);
        }
    }

    #[test]
    fn test_divider_holds_badge_text() {
        let mut deck = DeckBuilder::new("Test");
        let slide = deck.add_divider_slide("Networking\n& Migrations", "~18% of Exam", Segment::Networking);
        let texts = slide.texts();
        assert!(texts.contains(&"~18% of Exam".to_string()));
        assert!(texts.contains(&"Networking\n& Migrations".to_string()));
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let mut deck = DeckBuilder::new("Test");
        let slide = deck.add_content_slide("Broken", Segment::Opening, None);
        let rows: [[&str; 0]; 0] = [];
        let err = slide.add_table(Table::new(&rows, &[])).unwrap_err();
        assert!(matches!(err, Error::EmptyTable { slide: 1 }));
    }

    #[test]
    fn test_ragged_table_is_rejected() {
        let mut deck = DeckBuilder::new("Test");
        let slide = deck.add_content_slide("Broken", Segment::Opening, None);
        let rows = vec![vec!["A", "B"], vec!["only one"]];
        let err = slide.add_table(Table::new(&rows, &[1.0, 1.0])).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedTable {
                row: 2,
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_demo_adds_heading_and_items() {
        let mut deck = DeckBuilder::new("Test");
        let slide = deck.add_content_slide("Segment 1 Demos", Segment::Identity, None);
        slide.add_demo(["Policy: Assign a policy"]);
        let texts = slide.texts();
        assert!(texts.contains(&"Live Demo Exercises".to_string()));
        assert!(texts.contains(&"\u{2022} Policy: Assign a policy".to_string()));
    }
}
